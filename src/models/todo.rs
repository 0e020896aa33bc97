use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// The two states a todo moves between. Any transition is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoStatus {
    Pending,
    Completed,
}

/// Represents a todo entity as stored in the database and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    /// Collection the todo belongs to.
    pub collection_id: i32,
    /// Set by the store when the row is inserted.
    pub created_at: DateTime<Utc>,
}

impl Todo {
    pub fn status(&self) -> TodoStatus {
        if self.completed {
            TodoStatus::Completed
        } else {
            TodoStatus::Pending
        }
    }
}

/// Body of `POST /collection/{id}/todo`.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TodoInput {
    /// Must be between 1 and 200 characters.
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,

    /// Maximum length of 1000 characters if provided.
    #[validate(length(max = 1000, message = "Description is too long"))]
    pub description: Option<String>,
}

/// Body of `PUT /collection/{id}/todo`.
///
/// Fields left out keep their stored value.
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoInput {
    pub todo_id: i32,

    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: Option<String>,

    #[validate(length(max = 1000, message = "Description is too long"))]
    pub description: Option<String>,

    pub completed: Option<bool>,
}

/// Body of `DELETE /collection/{id}/todo`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTodoInput {
    pub todo_id: i32,
}

/// A validated todo ready to be inserted into a collection.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub collection_id: i32,
    pub title: String,
    pub description: Option<String>,
}

impl NewTodo {
    pub fn new(input: TodoInput, collection_id: i32) -> Self {
        Self {
            collection_id,
            title: input.title,
            description: input.description,
        }
    }
}

/// Changes applied to an existing todo. `None` leaves a field untouched.
#[derive(Debug, Clone)]
pub struct TodoUpdate {
    pub collection_id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TodoUpdate {
    pub fn new(input: UpdateTodoInput, collection_id: i32) -> Self {
        Self {
            collection_id,
            title: input.title,
            description: input.description,
            completed: input.completed,
        }
    }

    pub fn apply_to(&self, todo: &mut Todo) {
        todo.collection_id = self.collection_id;
        if let Some(title) = &self.title {
            todo.title = title.clone();
        }
        if let Some(description) = &self.description {
            todo.description = Some(description.clone());
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodoCreated {
    pub message: String,
    pub todo: Todo,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoUpdated {
    pub message: String,
    pub updated_todo: Todo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodoList {
    pub todos: Vec<Todo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Todo {
        Todo {
            id: 1,
            title: "Buy milk".to_string(),
            description: None,
            completed: false,
            collection_id: 2,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_todo_input_validation() {
        let empty_title = TodoInput {
            title: "".to_string(),
            description: Some("Test Description".to_string()),
        };
        assert!(empty_title.validate().is_err());

        let long_title = TodoInput {
            title: "a".repeat(201),
            description: None,
        };
        assert!(long_title.validate().is_err());

        let long_description = TodoInput {
            title: "Valid title".to_string(),
            description: Some("b".repeat(1001)),
        };
        assert!(long_description.validate().is_err());

        let valid = TodoInput {
            title: "Buy milk".to_string(),
            description: None,
        };
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn test_update_input_accepts_partial_body() {
        let input: UpdateTodoInput =
            serde_json::from_str(r#"{"todoId": 5, "completed": true}"#).unwrap();
        assert_eq!(input.todo_id, 5);
        assert!(input.title.is_none());
        assert!(input.validate().is_ok());

        let blank: UpdateTodoInput =
            serde_json::from_str(r#"{"todoId": 5, "title": ""}"#).unwrap();
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_update_keeps_absent_fields() {
        let mut todo = sample();
        todo.description = Some("2 litres".to_string());
        assert_eq!(todo.status(), TodoStatus::Pending);

        TodoUpdate {
            collection_id: 2,
            title: None,
            description: None,
            completed: Some(true),
        }
        .apply_to(&mut todo);

        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.description.as_deref(), Some("2 litres"));
        assert_eq!(todo.status(), TodoStatus::Completed);
    }

    #[test]
    fn test_todo_wire_format() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["collectionId"], 2);
        assert_eq!(json["completed"], false);
        assert!(json["createdAt"].is_string());
    }
}

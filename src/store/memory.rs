use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use super::Store;
use crate::error::AppError;
use crate::models::{Collection, NewTodo, Todo, TodoUpdate, User};

/// In-process store with the same semantics as the Postgres schema: serial ids,
/// unique emails and foreign keys from collections to users and todos to collections.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    collections: Vec<Collection>,
    todos: Vec<Todo>,
    next_user_id: i32,
    next_collection_id: i32,
    next_todo_id: i32,
}

fn next_id(counter: &mut i32) -> i32 {
    *counter += 1;
    *counter
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>, AppError> {
        self.tables
            .lock()
            .map_err(|_| AppError::Internal("memory store lock poisoned".into()))
    }
}

impl Tables {
    fn collection_exists(&self, id: i32) -> bool {
        self.collections.iter().any(|c| c.id == id)
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, AppError> {
        let mut tables = self.tables()?;
        if tables.users.iter().any(|u| u.email == email) {
            return Err(AppError::DuplicateEmail);
        }
        let user = User {
            id: next_id(&mut tables.next_user_id),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let tables = self.tables()?;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn create_collection(&self, user_id: i32, name: &str) -> Result<Collection, AppError> {
        let mut tables = self.tables()?;
        if !tables.users.iter().any(|u| u.id == user_id) {
            return Err(AppError::Database(format!(
                "collections.user_id references missing user {}",
                user_id
            )));
        }
        let collection = Collection {
            id: next_id(&mut tables.next_collection_id),
            name: name.to_string(),
            user_id,
        };
        tables.collections.push(collection.clone());
        Ok(collection)
    }

    async fn find_collection(&self, id: i32) -> Result<Option<Collection>, AppError> {
        let tables = self.tables()?;
        Ok(tables.collections.iter().find(|c| c.id == id).cloned())
    }

    async fn list_collections(&self, user_id: i32) -> Result<Vec<Collection>, AppError> {
        let tables = self.tables()?;
        Ok(tables
            .collections
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, AppError> {
        let mut tables = self.tables()?;
        if !tables.collection_exists(todo.collection_id) {
            return Err(AppError::NotFound("Collection not found".into()));
        }
        let created = Todo {
            id: next_id(&mut tables.next_todo_id),
            title: todo.title.clone(),
            description: todo.description.clone(),
            completed: false,
            collection_id: todo.collection_id,
            created_at: Utc::now(),
        };
        tables.todos.push(created.clone());
        Ok(created)
    }

    async fn find_todo(&self, id: i32) -> Result<Option<Todo>, AppError> {
        let tables = self.tables()?;
        Ok(tables.todos.iter().find(|t| t.id == id).cloned())
    }

    async fn update_todo(&self, id: i32, update: &TodoUpdate) -> Result<Option<Todo>, AppError> {
        let mut tables = self.tables()?;
        if !tables.collection_exists(update.collection_id) {
            return Err(AppError::NotFound("Collection not found".into()));
        }
        Ok(tables.todos.iter_mut().find(|t| t.id == id).map(|todo| {
            update.apply_to(todo);
            todo.clone()
        }))
    }

    async fn delete_todo(&self, id: i32) -> Result<bool, AppError> {
        let mut tables = self.tables()?;
        let before = tables.todos.len();
        tables.todos.retain(|t| t.id != id);
        Ok(tables.todos.len() < before)
    }

    async fn list_todos(&self, collection_id: i32) -> Result<Vec<Todo>, AppError> {
        let tables = self.tables()?;
        Ok(tables
            .todos
            .iter()
            .filter(|t| t.collection_id == collection_id)
            .cloned()
            .collect())
    }
}

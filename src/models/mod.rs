pub mod collection;
pub mod todo;
pub mod user;

pub use collection::{Collection, CollectionCreated, CollectionInput, CollectionList};
pub use todo::{
    DeleteTodoInput, NewTodo, Todo, TodoCreated, TodoInput, TodoList, TodoUpdate, TodoUpdated,
    UpdateTodoInput,
};
pub use user::User;

use serde::{Deserialize, Serialize};

/// Body of responses that carry nothing but a human-readable message.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

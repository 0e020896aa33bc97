//! Persistence behind a single trait.
//!
//! Handlers only see `dyn Store`. `PgStore` is the production implementation on
//! top of a sqlx `PgPool`; `MemoryStore` keeps the same contract in process memory
//! and backs the integration tests.
//!
//! Every method is a single read or write. None of them checks ownership; that is
//! the caller's job.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{Collection, NewTodo, Todo, TodoUpdate, User};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait Store: Send + Sync {
    /// Inserts a user. Fails with `AppError::DuplicateEmail` when the email is taken.
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, AppError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn create_collection(&self, user_id: i32, name: &str) -> Result<Collection, AppError>;

    async fn find_collection(&self, id: i32) -> Result<Option<Collection>, AppError>;

    /// Collections of one user in insertion order.
    async fn list_collections(&self, user_id: i32) -> Result<Vec<Collection>, AppError>;

    /// Inserts a todo with `completed = false` and the current time as `created_at`.
    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, AppError>;

    async fn find_todo(&self, id: i32) -> Result<Option<Todo>, AppError>;

    /// Returns `None` when no todo has this id.
    async fn update_todo(&self, id: i32, update: &TodoUpdate) -> Result<Option<Todo>, AppError>;

    /// Returns `false` when no todo has this id.
    async fn delete_todo(&self, id: i32) -> Result<bool, AppError>;

    /// Todos of one collection in insertion order.
    async fn list_todos(&self, collection_id: i32) -> Result<Vec<Todo>, AppError>;
}

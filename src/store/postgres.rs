use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::Store;
use crate::config::Config;
use crate::error::AppError;
use crate::models::{Collection, NewTodo, Todo, TodoUpdate, User};

const TODO_COLUMNS: &str = "id, title, description, completed, collection_id, created_at";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens the connection pool described by `config`.
    pub async fn connect(config: &Config) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .connect(&config.database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Applies the bundled schema migrations.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, AppError> {
        // The UNIQUE constraint on users.email decides duplicates; see From<sqlx::Error>.
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash) VALUES ($1, $2)
             RETURNING id, email, password_hash",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn create_collection(&self, user_id: i32, name: &str) -> Result<Collection, AppError> {
        let collection = sqlx::query_as::<_, Collection>(
            "INSERT INTO collections (name, user_id) VALUES ($1, $2)
             RETURNING id, name, user_id",
        )
        .bind(name)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(collection)
    }

    async fn find_collection(&self, id: i32) -> Result<Option<Collection>, AppError> {
        let collection = sqlx::query_as::<_, Collection>(
            "SELECT id, name, user_id FROM collections WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(collection)
    }

    async fn list_collections(&self, user_id: i32) -> Result<Vec<Collection>, AppError> {
        let collections = sqlx::query_as::<_, Collection>(
            "SELECT id, name, user_id FROM collections WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(collections)
    }

    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, AppError> {
        let sql = format!(
            "INSERT INTO todos (title, description, collection_id) VALUES ($1, $2, $3)
             RETURNING {}",
            TODO_COLUMNS
        );
        let created = sqlx::query_as::<_, Todo>(&sql)
            .bind(&todo.title)
            .bind(&todo.description)
            .bind(todo.collection_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn find_todo(&self, id: i32) -> Result<Option<Todo>, AppError> {
        let sql = format!("SELECT {} FROM todos WHERE id = $1", TODO_COLUMNS);
        let todo = sqlx::query_as::<_, Todo>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn update_todo(&self, id: i32, update: &TodoUpdate) -> Result<Option<Todo>, AppError> {
        let sql = format!(
            "UPDATE todos
             SET title = COALESCE($1, title),
                 description = COALESCE($2, description),
                 completed = COALESCE($3, completed),
                 collection_id = $4
             WHERE id = $5
             RETURNING {}",
            TODO_COLUMNS
        );
        let todo = sqlx::query_as::<_, Todo>(&sql)
            .bind(&update.title)
            .bind(&update.description)
            .bind(update.completed)
            .bind(update.collection_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn delete_todo(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_todos(&self, collection_id: i32) -> Result<Vec<Todo>, AppError> {
        let sql = format!(
            "SELECT {} FROM todos WHERE collection_id = $1 ORDER BY id",
            TODO_COLUMNS
        );
        let todos = sqlx::query_as::<_, Todo>(&sql)
            .bind(collection_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(todos)
    }
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered account. Created once on signup and never modified.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    /// Bcrypt hash; never part of an API response.
    #[serde(skip_serializing)]
    pub password_hash: String,
}

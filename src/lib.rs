#![doc = "The `todo_collections` library crate."]
#![doc = ""]
#![doc = "Users sign up and sign in, then manage named collections of todos through a"]
#![doc = "bearer-token protected JSON API. Every todo operation is gated by the ownership"]
#![doc = "chain user → collection → todo."]
#![doc = ""]
#![doc = "The binary (`main.rs`) reads `Config`, opens the Postgres store and serves"]
#![doc = "`routes::config` behind `auth::AuthMiddleware`."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

pub use crate::config::Config;
pub use crate::error::AppError;

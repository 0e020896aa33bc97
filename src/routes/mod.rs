pub mod auth;
pub mod collections;
pub mod health;
pub mod todos;

use actix_web::web;

use crate::error::AppError;

/// Registers every route of the API.
///
/// `create_collection` is registered before the todo routes so that
/// `/collection/new/{title}` wins over `/collection/{id}/todo` for a collection
/// literally named `todo`.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(health::index)
        .service(health::health)
        .service(auth::signup)
        .service(auth::signin)
        .service(collections::create_collection)
        .service(collections::list_collections)
        .service(todos::create_todo)
        .service(todos::update_todo)
        .service(todos::delete_todo)
        .service(todos::list_todos);
}

/// Malformed or mistyped JSON bodies answer `400 {message}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::Validation(format!("Invalid request body: {}", err)).into()
    })
}

/// Non-numeric ids in the path answer `400 {message}` instead of a bare 404.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::Validation(format!("Invalid path: {}", err)).into())
}

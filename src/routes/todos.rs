use crate::{
    auth::Identity,
    error::AppError,
    models::{
        Collection, DeleteTodoInput, MessageResponse, NewTodo, TodoCreated, TodoInput, TodoList,
        TodoUpdate, TodoUpdated, UpdateTodoInput,
    },
    store::Store,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use validator::Validate;

/// Loads a collection and checks that the caller owns it.
///
/// `404` when the collection does not exist, `403` when it belongs to someone else.
pub async fn owned_collection(
    store: &dyn Store,
    identity: Identity,
    collection_id: i32,
) -> Result<Collection, AppError> {
    let collection = store
        .find_collection(collection_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Collection not found".into()))?;

    if !collection.is_owned_by(identity.user_id) {
        log::warn!(
            "user {} denied access to collection {}",
            identity.user_id,
            collection_id
        );
        return Err(AppError::Forbidden);
    }
    Ok(collection)
}

/// Creates a todo in one of the caller's collections.
///
/// ## Request Body:
/// - `title`: required, 1 to 200 characters.
/// - `description` (optional): up to 1000 characters.
///
/// ## Responses:
/// - `201 Created`: `{message, todo}` with `completed = false`.
/// - `400 Bad Request`: missing or empty title.
/// - `403 Forbidden` / `404 Not Found`: see `owned_collection`.
#[post("/collection/{id}/todo")]
pub async fn create_todo(
    store: web::Data<dyn Store>,
    identity: Identity,
    collection_id: web::Path<i32>,
    todo_data: web::Json<TodoInput>,
) -> Result<impl Responder, AppError> {
    todo_data.validate()?;
    let collection = owned_collection(store.get_ref(), identity, *collection_id).await?;

    let todo = store
        .create_todo(&NewTodo::new(todo_data.into_inner(), collection.id))
        .await?;

    Ok(HttpResponse::Created().json(TodoCreated {
        message: "Todo created".into(),
        todo,
    }))
}

/// Updates a todo and links it to the collection in the path.
///
/// Only the fields present in the body change. Both the todo's current collection
/// and the target collection must belong to the caller.
///
/// ## Responses:
/// - `200 OK`: `{message, updatedTodo}`.
/// - `400 Bad Request`: empty title or missing `todoId`.
/// - `403 Forbidden`: either collection belongs to another user.
/// - `404 Not Found`: unknown todo or collection.
#[put("/collection/{id}/todo")]
pub async fn update_todo(
    store: web::Data<dyn Store>,
    identity: Identity,
    collection_id: web::Path<i32>,
    todo_data: web::Json<UpdateTodoInput>,
) -> Result<impl Responder, AppError> {
    todo_data.validate()?;
    let target = owned_collection(store.get_ref(), identity, *collection_id).await?;

    let todo_id = todo_data.todo_id;
    let current = store
        .find_todo(todo_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Todo not found".into()))?;
    if current.collection_id != target.id {
        owned_collection(store.get_ref(), identity, current.collection_id).await?;
    }

    let updated_todo = store
        .update_todo(todo_id, &TodoUpdate::new(todo_data.into_inner(), target.id))
        .await?
        .ok_or_else(|| AppError::NotFound("Todo not found".into()))?;
    log::info!(
        "todo {} in collection {} is now {:?}",
        updated_todo.id,
        target.id,
        updated_todo.status()
    );

    Ok(HttpResponse::Ok().json(TodoUpdated {
        message: "Todo updated".into(),
        updated_todo,
    }))
}

/// Deletes a todo from one of the caller's collections.
///
/// A todo that lives in another collection than the one in the path is treated
/// as absent.
#[delete("/collection/{id}/todo")]
pub async fn delete_todo(
    store: web::Data<dyn Store>,
    identity: Identity,
    collection_id: web::Path<i32>,
    todo_data: web::Json<DeleteTodoInput>,
) -> Result<impl Responder, AppError> {
    let collection = owned_collection(store.get_ref(), identity, *collection_id).await?;

    let todo = store
        .find_todo(todo_data.todo_id)
        .await?
        .filter(|todo| todo.collection_id == collection.id)
        .ok_or_else(|| AppError::NotFound("Todo not found".into()))?;

    if !store.delete_todo(todo.id).await? {
        return Err(AppError::NotFound("Todo not found".into()));
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Todo deleted")))
}

/// Lists every todo of one of the caller's collections, oldest first.
#[get("/collection/{id}/todos")]
pub async fn list_todos(
    store: web::Data<dyn Store>,
    identity: Identity,
    collection_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let collection = owned_collection(store.get_ref(), identity, *collection_id).await?;
    let todos = store.list_todos(collection.id).await?;
    Ok(HttpResponse::Ok().json(TodoList { todos }))
}

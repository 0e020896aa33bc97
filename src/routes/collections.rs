use crate::{
    auth::Identity,
    error::AppError,
    models::{CollectionCreated, CollectionInput, CollectionList},
    store::Store,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use validator::Validate;

/// Creates a collection owned by the authenticated user.
///
/// The name is the last path segment, so `POST /collection/new/Work` creates
/// a collection named `Work`.
///
/// ## Responses:
/// - `201 Created`: `{message, newCollection}`.
/// - `400 Bad Request`: the name is longer than 100 characters.
/// - `401 Unauthorized`: missing or invalid token.
#[post("/collection/new/{title}")]
pub async fn create_collection(
    store: web::Data<dyn Store>,
    identity: Identity,
    input: web::Path<CollectionInput>,
) -> Result<impl Responder, AppError> {
    input.validate()?;

    let collection = store
        .create_collection(identity.user_id, &input.title)
        .await?;

    Ok(HttpResponse::Created().json(CollectionCreated {
        message: "Collection created".into(),
        new_collection: collection,
    }))
}

/// Lists the authenticated user's collections in creation order.
#[get("/collections")]
pub async fn list_collections(
    store: web::Data<dyn Store>,
    identity: Identity,
) -> Result<impl Responder, AppError> {
    let collections = store.list_collections(identity.user_id).await?;
    Ok(HttpResponse::Ok().json(CollectionList { collections }))
}

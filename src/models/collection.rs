use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A named group of todos owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: i32,
    pub name: String,
    pub user_id: i32,
}

impl Collection {
    pub fn is_owned_by(&self, user_id: i32) -> bool {
        self.user_id == user_id
    }
}

/// Name taken from the `/collection/new/{title}` path segment.
#[derive(Debug, Deserialize, Validate)]
pub struct CollectionInput {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Collection name must be between 1 and 100 characters"
    ))]
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionCreated {
    pub message: String,
    pub new_collection: Collection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CollectionList {
    pub collections: Vec<Collection>,
}

//! Runs the store contract against a real database.
//!
//! Needs `DATABASE_URL` pointing at a scratch Postgres database:
//! `cargo test --test postgres -- --ignored`

use dotenv::dotenv;
use sqlx::postgres::PgPoolOptions;
use todo_collections::models::{NewTodo, TodoUpdate};
use todo_collections::store::{PgStore, Store};
use todo_collections::AppError;

async fn connect() -> PgStore {
    dotenv().ok();
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .expect("Failed to connect to test DB");
    let store = PgStore::new(pool);
    store.migrate().await.expect("Failed to run migrations");
    store
}

async fn cleanup_user(store: &PgStore, email: &str) {
    let _ = sqlx::query("DELETE FROM users WHERE email = $1")
        .bind(email)
        .execute(store.pool())
        .await;
}

#[ignore]
#[actix_rt::test]
async fn test_unique_constraint_reports_duplicate_email() {
    let store = connect().await;
    let email = "pg_duplicate@example.com";
    cleanup_user(&store, email).await;

    store.create_user(email, "hash").await.unwrap();
    let err = store.create_user(email, "other-hash").await.unwrap_err();
    assert_eq!(err, AppError::DuplicateEmail);

    cleanup_user(&store, email).await;
}

#[ignore]
#[actix_rt::test]
async fn test_todo_crud_against_postgres() {
    let store = connect().await;
    let email = "pg_crud@example.com";
    cleanup_user(&store, email).await;

    let user = store.create_user(email, "hash").await.unwrap();
    let collection = store.create_collection(user.id, "Work").await.unwrap();
    assert_eq!(
        store.list_collections(user.id).await.unwrap(),
        vec![collection.clone()]
    );

    let todo = store
        .create_todo(&NewTodo {
            collection_id: collection.id,
            title: "Buy milk".into(),
            description: None,
        })
        .await
        .unwrap();
    assert!(!todo.completed);

    let updated = store
        .update_todo(
            todo.id,
            &TodoUpdate {
                collection_id: collection.id,
                title: None,
                description: Some("2 litres".into()),
                completed: Some(true),
            },
        )
        .await
        .unwrap()
        .expect("todo exists");
    assert_eq!(updated.title, "Buy milk");
    assert!(updated.completed);

    assert_eq!(store.list_todos(collection.id).await.unwrap(), vec![updated]);
    assert!(store.delete_todo(todo.id).await.unwrap());
    assert!(!store.delete_todo(todo.id).await.unwrap());

    let orphan = store
        .create_todo(&NewTodo {
            collection_id: -1,
            title: "Orphan".into(),
            description: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(orphan, AppError::NotFound(_)));

    cleanup_user(&store, email).await;
}

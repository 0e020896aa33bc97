#![allow(dead_code)]

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{header, StatusCode};
use actix_web::middleware::Logger;
use actix_web::{test, web, App};
use serde_json::json;
use todo_collections::auth::{AuthMiddleware, SigninResponse, TokenKeys};
use todo_collections::routes;
use todo_collections::store::{MemoryStore, Store};
use todo_collections::Config;

pub const SECRET: &str = "integration-test-secret";
pub const PASSWORD: &str = "Abcd123!";

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://unused".into(),
        server_host: "127.0.0.1".into(),
        server_port: 0,
        jwt_secret: SECRET.into(),
        token_ttl_hours: 420,
        // Lowest bcrypt cost keeps debug-build tests fast.
        bcrypt_cost: 4,
        database_max_connections: 1,
    }
}

pub fn memory_store() -> Arc<dyn Store> {
    Arc::new(MemoryStore::new())
}

/// Builds the full application the way `main` does, on top of `store`.
pub async fn init_app(
    store: Arc<dyn Store>,
) -> impl Service<
    actix_http::Request,
    Response = ServiceResponse<impl MessageBody>,
    Error = actix_web::Error,
> {
    let config = test_config();
    let keys = TokenKeys::from_config(&config);
    test::init_service(
        App::new()
            .app_data(web::Data::from(store))
            .app_data(web::Data::new(config))
            .app_data(web::Data::new(keys.clone()))
            .wrap(AuthMiddleware::new(keys))
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .configure(routes::config),
    )
    .await
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

pub async fn signup(
    app: &impl Service<
        actix_http::Request,
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
    >,
    email: &str,
    password: &str,
) -> StatusCode {
    let req = test::TestRequest::post()
        .uri("/signup")
        .set_json(json!({ "email": email, "password": password }))
        .to_request();
    test::call_service(app, req).await.status()
}

/// Registers `email` and signs in, returning the bearer token.
pub async fn register_and_sign_in(
    app: &impl Service<
        actix_http::Request,
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
    >,
    email: &str,
) -> String {
    assert_eq!(signup(app, email, PASSWORD).await, StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/signin")
        .set_json(json!({ "email": email, "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: SigninResponse = test::read_body_json(resp).await;
    body.token
}

/// Creates a collection and returns its id.
pub async fn create_collection(
    app: &impl Service<
        actix_http::Request,
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
    >,
    token: &str,
    name: &str,
) -> i64 {
    let req = test::TestRequest::post()
        .uri(&format!("/collection/new/{}", name))
        .insert_header(bearer(token))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    body["newCollection"]["id"]
        .as_i64()
        .expect("collection id in response")
}

/// Creates a todo and returns the response body's `todo` object.
pub async fn create_todo(
    app: &impl Service<
        actix_http::Request,
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
    >,
    token: &str,
    collection_id: i64,
    title: &str,
) -> serde_json::Value {
    let req = test::TestRequest::post()
        .uri(&format!("/collection/{}/todo", collection_id))
        .insert_header(bearer(token))
        .set_json(json!({ "title": title }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    body["todo"].clone()
}

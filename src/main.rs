use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};

use todo_collections::auth::{AuthMiddleware, TokenKeys};
use todo_collections::routes;
use todo_collections::store::{PgStore, Store};
use todo_collections::Config;

fn startup_error(context: &str, err: impl std::fmt::Display) -> io::Error {
    log::error!("{}: {}", context, err);
    io::Error::new(io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| startup_error("invalid configuration", e))?;

    let pg = PgStore::connect(&config)
        .await
        .map_err(|e| startup_error("failed to connect to database", e))?;
    pg.migrate()
        .await
        .map_err(|e| startup_error("failed to run migrations", e))?;

    let store: Arc<dyn Store> = Arc::new(pg);
    let store = web::Data::from(store);
    let keys = TokenKeys::from_config(&config);
    let bind = (config.server_host.clone(), config.server_port);

    log::info!("Starting server at {}", config.server_url());
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(config.clone())
            .app_data(web::Data::new(keys.clone()))
            .wrap(AuthMiddleware::new(keys.clone()))
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .configure(routes::config)
    })
    .bind(bind)?
    .run()
    .await
}

#[macro_use]
extern crate log;

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{http, middleware::Logger, web, web::Data, App, HttpServer};
use dotenv::dotenv;

mod config;
mod handlers;
mod routes;
mod tests;
mod validate;

use crate::config::AppConfig;
use crate::routes::{not_found, routes};
use db::{MemoryStore, PgStore, PollStore};

fn new_store() -> io::Result<Arc<dyn PollStore>> {
    match db::pool_from_env() {
        Some(Ok(pool)) => {
            info!("Using PostgreSQL store");
            Ok(Arc::new(PgStore::new(pool)))
        }
        Some(Err(err)) => Err(io::Error::new(io::ErrorKind::Other, err.to_string())),
        None => {
            warn!("DATABASE_URL is not set, questions will only be kept in memory");
            Ok(Arc::new(MemoryStore::default()))
        }
    }
}

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();
    let store = new_store()?;
    let bind_address = config.bind_address.clone();

    info!("Starting polls server on {}", bind_address);

    HttpServer::new(move || {
        let cors = match &config.client_host {
            Some(host) => Cors::default()
                .allowed_origin(host)
                .allow_any_method()
                .allowed_headers(vec![
                    http::header::AUTHORIZATION,
                    http::header::ACCEPT,
                    http::header::CONTENT_TYPE,
                ])
                .max_age(3600),
            None => Cors::default(),
        };

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(Logger::new("%a %{User-Agent}i"))
            .wrap(auth::get_identity_service())
            .app_data(Data::from(store.clone()))
            .app_data(Data::new(config.clone()))
            .configure(routes)
            .default_service(web::route().to(not_found))
    })
    .bind(bind_address)?
    .run()
    .await
}

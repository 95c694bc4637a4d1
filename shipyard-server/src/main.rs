#![deny(missing_docs)]
//! Shipyard server executable.
//!
//! Hosts the HTTP endpoints of the ship registry.

mod config;
mod db;
mod models;
mod openapi;
mod routes;
mod schema;
mod store;

#[cfg(not(test))]
use std::sync::Arc;

#[cfg(not(test))]
use actix_cors::Cors;
#[cfg(not(test))]
use actix_web::{App, HttpServer, http::header, web};
#[cfg(not(test))]
use dotenvy::dotenv;
#[cfg(not(test))]
use shipyard_core::{InMemoryShipRepository, SharedRepository, ShipService};

#[cfg(not(test))]
use crate::config::{ServerConfig, StorageMode};
#[cfg(not(test))]
use crate::db::init_pool;
#[cfg(not(test))]
use crate::routes::{AppState, configure};
#[cfg(not(test))]
use crate::store::PgShipRepository;

#[cfg(not(test))]
fn build_repository(config: &ServerConfig) -> Result<SharedRepository, String> {
    match (config.storage, config.database_url.as_deref()) {
        (StorageMode::Memory, _) => {
            log::warn!("using in-memory ship storage; records are lost on restart");
            Ok(Arc::new(InMemoryShipRepository::new()))
        }
        (StorageMode::Postgres, Some(url)) => Ok(Arc::new(PgShipRepository::new(init_pool(url)?))),
        (StorageMode::Postgres, None) => Err("DATABASE_URL must be set".to_string()),
    }
}

#[cfg(not(test))]
fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env().map_err(std::io::Error::other)?;
    let repository = build_repository(&config).map_err(std::io::Error::other)?;
    let state = web::Data::new(AppState {
        ships: ShipService::new(repository),
    });

    let allowed_origins = config.ui_origins.clone();
    let listen_addr = config.host.clone();
    let listen_port = config.port;
    log::info!("listening on {listen_addr}:{listen_port}");

    actix_web::rt::System::new().block_on(async move {
        HttpServer::new(move || {
            let mut cors = Cors::default()
                .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
                .allowed_headers(vec![header::CONTENT_TYPE])
                .max_age(3600);
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            App::new()
                .wrap(actix_web::middleware::Logger::default())
                .wrap(cors)
                .app_data(state.clone())
                .configure(configure)
        })
        .bind((listen_addr, listen_port))?
        .run()
        .await
    })
}

#[cfg(test)]
fn main() {}

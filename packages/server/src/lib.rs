#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the SecureCheck traffic-stop dashboard.
//!
//! Serves the JSON API a presentation layer renders as the dashboard page:
//! the full stop table, headline metrics, the canned query menus, and the
//! outcome/violation prediction form. Every request builds its own
//! [`interaction::Interaction`], fetches what it needs once, derives the
//! response from it, and drops it.

pub mod form;
mod handlers;
pub mod interaction;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use securecheck_database::{DatabaseConfig, DatabaseStore, StopStore};

/// Page title shown above the dashboard.
pub const PAGE_TITLE: &str = "SecureCheck: Police Check Post Digital Ledger";

/// Page subtitle shown under the title.
pub const PAGE_SUBTITLE: &str = "Real-time monitoring and insights for law enforcement";

/// Shared application state.
pub struct AppState {
    /// Stop-record store. Holds configuration only; connections are opened
    /// per query.
    pub store: Arc<dyn StopStore>,
}

/// Registers the `/api` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/dashboard", web::get().to(handlers::dashboard))
            .route("/logs", web::get().to(handlers::logs))
            .route("/metrics", web::get().to(handlers::metrics))
            .route("/catalog/{tier}", web::get().to(handlers::catalog_menu))
            .route("/catalog/{tier}/run", web::post().to(handlers::run_catalog))
            .route("/form", web::get().to(handlers::form))
            .route("/predict", web::post().to(handlers::predict)),
    );
}

/// Starts the SecureCheck API server.
///
/// Reads the store configuration from the environment and starts the
/// Actix-Web HTTP server. No connection is opened at startup; each request
/// connects on demand. The caller provides the async runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let store = DatabaseStore::new(DatabaseConfig::from_env());
    log::info!("Using stop-record store at {}", store.config().describe());

    let state = web::Data::new(AppState {
        store: Arc::new(store),
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((bind_addr, port))?
    .run()
    .await
}

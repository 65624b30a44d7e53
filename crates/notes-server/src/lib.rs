//! notes-server: HTTP API server for the notes application.
//!
//! This crate provides:
//! - REST endpoints for notes (list, get, create, update, delete)
//! - User registration with password hashing
//! - A centralized error translator mapping store failures to HTTP responses
//!
//! # Architecture
//!
//! The server is built on Axum. Handlers are stateless: every effect goes
//! through the shared [`Store`](notes_store::Store) handle in [`AppState`],
//! and every failure propagates as an [`ApiError`] to a single exit point.
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_server::{config::ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::from_env()?;
//!     run_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod password;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export the storage crate
pub use notes_store;

use axum::{Json, Router, http::StatusCode};
use notes_store::Store;
use tower_http::trace::TraceLayer;

/// Build the application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::notes::routes())
        .merge(routes::users::routes())
        .fallback(unknown_path)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Fallback handler for requests matching no route.
async fn unknown_path() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "unknown path" })),
    )
}

/// Connect to the store, apply the schema, and serve until shutdown.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::connect(&config.database_url).await?;
    store.apply_schema().await?;

    let state = AppState::new(store);
    let router = app(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");

    axum::serve(listener, router).await?;
    Ok(())
}

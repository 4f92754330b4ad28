//! BytePress HTTP API server (Axum).
//!
//! Exposes the compression chain as a single POST endpoint plus
//! health/status monitoring.

pub mod error;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use state::AppState;

/// Build the application router with default state.
pub fn app() -> Router {
    app_with_state(AppState::new())
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::compress_routes())
        .layer(DefaultBodyLimit::max(state.max_payload_bytes))
        .with_state(state)
}

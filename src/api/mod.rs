//! REST API for the load optimizer.
//!
//! Provides two endpoints:
//! - `GET /config` — the active scenario configuration
//! - `POST /optimize` — run the reduction transform on submitted loads

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::config::ScenarioConfig;

pub use types::{OptimizeRequest, OptimizeResponse};

/// Immutable application state shared across all request handlers.
///
/// Only the validated scenario lives here: every `/optimize` request
/// computes independently with its own optimizer, so the state is
/// read-only and wrapped in `Arc` with no locks.
pub struct AppState {
    /// Scenario configuration the server was started with.
    pub scenario: ScenarioConfig,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/config", get(handlers::get_config))
        .route("/optimize", post(handlers::post_optimize))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}

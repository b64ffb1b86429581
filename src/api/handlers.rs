//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use super::AppState;
use super::types::{ErrorResponse, OptimizeRequest, OptimizeResponse};
use crate::config::ScenarioConfig;
use crate::opt::metrics::compute_metrics;
use crate::opt::optimizer::Optimizer;
use crate::opt::types::LoadVector;

/// Returns the scenario configuration the server was started with.
///
/// `GET /config` → 200 + `ScenarioConfig` JSON
pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<ScenarioConfig> {
    Json(state.scenario.clone())
}

/// Runs one optimization over the submitted loads.
///
/// `POST /optimize` → 200 + `OptimizeResponse` JSON
/// Loads outside the configured input range → 400 + `ErrorResponse`
///
/// Each request computes independently: a fresh optimizer is built per
/// call, seeded from the request when a seed is given and from the OS
/// otherwise, so no mutable state is shared between requests.
pub async fn post_optimize(
    State(state): State<Arc<AppState>>,
    Json(req): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let before = LoadVector::new(req.loads);
    state.scenario.input.check_loads(&before).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    let o = &state.scenario.optimizer;
    let mut optimizer = match req.seed {
        Some(seed) => Optimizer::new(o.floor_kw, o.min_offset_kw, o.max_offset_kw, seed),
        None => Optimizer::from_entropy(o.floor_kw, o.min_offset_kw, o.max_offset_kw),
    };

    let after = optimizer.optimize(&before);
    let metrics = compute_metrics(&before, &after);

    Ok(Json(OptimizeResponse {
        before,
        after,
        metrics,
    }))
}

//! API request and response types.

use serde::{Deserialize, Serialize};

use crate::opt::metrics::ImpactMetrics;
use crate::opt::types::{LoadVector, NUM_BUILDINGS, OptimizedVector};

/// Body of a `POST /optimize` request.
#[derive(Debug, Serialize, Deserialize)]
pub struct OptimizeRequest {
    /// Per-building loads in kW, in building order.
    pub loads: [u32; NUM_BUILDINGS],
    /// Optional seed; when present the response is reproducible.
    pub seed: Option<u64>,
}

/// Body of a successful `POST /optimize` response.
#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    /// Loads as submitted (kW).
    pub before: LoadVector,
    /// Optimized loads (kW).
    pub after: OptimizedVector,
    /// Derived impact metrics.
    pub metrics: ImpactMetrics,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

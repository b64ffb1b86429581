//! Load optimization core: transform, metrics, and reporting.

/// Impact metric computation from before/after load pairs.
pub mod metrics;
/// The randomized reduction transform.
pub mod optimizer;
pub mod report;
pub mod types;

// Re-export the main types for convenience
pub use metrics::ImpactMetrics;
pub use metrics::compute_metrics;
pub use optimizer::Optimizer;
pub use report::SessionReport;
pub use types::LoadVector;
pub use types::OptimizedVector;
pub use types::RunRecord;

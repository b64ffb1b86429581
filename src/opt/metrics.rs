//! Impact metrics derived from a before/after load pair.

use serde::{Deserialize, Serialize};

use super::types::{LoadVector, OptimizedVector};

/// Derived scalar bundle for one optimization run.
///
/// Recomputed on every trigger from a `(LoadVector, OptimizedVector)`
/// pair; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactMetrics {
    /// Total load reduction: `sum(before) - sum(after)` (kW).
    pub total_savings_kw: i64,
    /// Peak load reduction: `max(before) - max(after)` (kW).
    pub peak_reduction_kw: i64,
    /// Savings as a percentage of the pre-optimization total, rounded
    /// to two decimals. `0.0` when the pre-optimization total is zero.
    pub savings_percent: f64,
}

/// Computes impact metrics from a before/after pair.
///
/// Pure and total: the zero-sum edge case yields a `0.0` percentage
/// instead of a division error.
///
/// # Examples
///
/// ```
/// use grid_opt::opt::metrics::compute_metrics;
/// use grid_opt::opt::types::LoadVector;
///
/// let before = LoadVector::new([60, 80, 45]);
/// let after = LoadVector::new([40, 60, 35]);
/// let m = compute_metrics(&before, &after);
/// assert_eq!(m.total_savings_kw, 50);
/// assert_eq!(m.peak_reduction_kw, 20);
/// assert_eq!(m.savings_percent, 27.03);
/// ```
pub fn compute_metrics(before: &LoadVector, after: &OptimizedVector) -> ImpactMetrics {
    let total_before = before.total_kw() as i64;
    let total_after = after.total_kw() as i64;
    let total_savings_kw = total_before - total_after;
    let peak_reduction_kw = i64::from(before.peak_kw()) - i64::from(after.peak_kw());

    let savings_percent = if total_before > 0 {
        round2(total_savings_kw as f64 / total_before as f64 * 100.0)
    } else {
        0.0
    };

    ImpactMetrics {
        total_savings_kw,
        peak_reduction_kw,
        savings_percent,
    }
}

/// Rounds to two decimal places.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

//! Core load types: the per-building load vector and per-run records.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::metrics::ImpactMetrics;

/// Number of buildings in a load vector.
pub const NUM_BUILDINGS: usize = 3;

/// Display labels for the buildings, in vector order.
pub const BUILDING_LABELS: [&str; NUM_BUILDINGS] = ["A", "B", "C"];

/// Ordered per-building load values in kW.
///
/// Immutable once read for a given optimization run: the optimizer takes
/// a reference and returns a fresh vector.
///
/// # Examples
///
/// ```
/// use grid_opt::opt::types::LoadVector;
///
/// let loads = LoadVector::new([60, 80, 45]);
/// assert_eq!(loads.total_kw(), 185);
/// assert_eq!(loads.peak_kw(), 80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadVector([u32; NUM_BUILDINGS]);

/// A `LoadVector`-shaped result of the reduction transform.
///
/// Same shape as the input; produced by [`super::Optimizer::optimize`]
/// and recomputed on every trigger, never persisted.
pub type OptimizedVector = LoadVector;

impl LoadVector {
    /// Creates a load vector from per-building kW values.
    pub fn new(values: [u32; NUM_BUILDINGS]) -> Self {
        Self(values)
    }

    /// Returns the underlying kW values in building order.
    pub fn values(&self) -> [u32; NUM_BUILDINGS] {
        self.0
    }

    /// Returns the load of building `i` in kW.
    ///
    /// # Panics
    ///
    /// Panics if `i >= NUM_BUILDINGS`.
    pub fn get(&self, i: usize) -> u32 {
        self.0[i]
    }

    /// Sum of all building loads (kW).
    pub fn total_kw(&self) -> u64 {
        self.0.iter().map(|&kw| u64::from(kw)).sum()
    }

    /// Maximum building load (kW).
    pub fn peak_kw(&self) -> u32 {
        // NUM_BUILDINGS > 0, so the max always exists
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Returns a copy with every element clamped into `[min_kw, max_kw]`.
    ///
    /// The bounded-slider contract for values that bypass the UI controls.
    pub fn clamped(&self, min_kw: u32, max_kw: u32) -> Self {
        Self(self.0.map(|kw| kw.clamp(min_kw, max_kw)))
    }
}

impl fmt::Display for LoadVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A={:>3} B={:>3} C={:>3}",
            self.0[0], self.0[1], self.0[2]
        )
    }
}

/// Complete record of one optimization run.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    /// Run index within the session.
    pub run: usize,
    /// Input loads read at trigger time (kW).
    pub before: LoadVector,
    /// Optimized loads (kW).
    pub after: OptimizedVector,
    /// Derived impact metrics for this run.
    pub metrics: ImpactMetrics,
    /// Number of elements clamped at the floor by the transform.
    pub floor_hits: u32,
}

impl fmt::Display for RunRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "run={:>3} | before: {} (sum={:>4}, peak={:>3}) | \
             after: {} (sum={:>4}, peak={:>3}) | \
             saved={:>4} kW  peak_cut={:>3} kW  {:>6.2}%  floor_hits={}",
            self.run,
            self.before,
            self.before.total_kw(),
            self.before.peak_kw(),
            self.after,
            self.after.total_kw(),
            self.after.peak_kw(),
            self.metrics.total_savings_kw,
            self.metrics.peak_reduction_kw,
            self.metrics.savings_percent,
            self.floor_hits,
        )
    }
}

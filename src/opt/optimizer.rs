//! The randomized load reduction transform.

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::metrics::compute_metrics;
use super::types::{LoadVector, NUM_BUILDINGS, OptimizedVector, RunRecord};
use crate::config::OptimizerConfig;

/// Applies the reduction transform to a load vector.
///
/// For each element an independent offset is drawn uniformly from
/// `[min_offset_kw, max_offset_kw]` (inclusive) and subtracted, bounded
/// below by `floor_kw`. The RNG is owned by the optimizer and seeded at
/// construction, so a fixed seed reproduces the full output sequence.
///
/// # Examples
///
/// ```
/// use grid_opt::opt::optimizer::Optimizer;
/// use grid_opt::opt::types::LoadVector;
///
/// let mut opt = Optimizer::new(10, 8, 24, 42);
/// let before = LoadVector::new([60, 80, 45]);
/// let after = opt.optimize(&before);
/// assert!(after.values().iter().all(|&kw| kw >= 10));
/// ```
#[derive(Debug, Clone)]
pub struct Optimizer {
    /// Minimum value any optimized load may fall to (kW).
    pub floor_kw: u32,
    /// Smallest random offset (kW).
    pub min_offset_kw: u32,
    /// Largest random offset (kW).
    pub max_offset_kw: u32,
    /// Random number generator for offset draws.
    rng: StdRng,
}

impl Optimizer {
    /// Creates an optimizer with a seeded RNG.
    ///
    /// # Panics
    ///
    /// Panics if `min_offset_kw > max_offset_kw`.
    pub fn new(floor_kw: u32, min_offset_kw: u32, max_offset_kw: u32, seed: u64) -> Self {
        assert!(
            min_offset_kw <= max_offset_kw,
            "min_offset_kw must be <= max_offset_kw"
        );
        Self {
            floor_kw,
            min_offset_kw,
            max_offset_kw,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates an optimizer seeded from the operating system.
    ///
    /// For request paths where reproducibility is not asked for.
    ///
    /// # Panics
    ///
    /// Panics if `min_offset_kw > max_offset_kw`.
    pub fn from_entropy(floor_kw: u32, min_offset_kw: u32, max_offset_kw: u32) -> Self {
        assert!(
            min_offset_kw <= max_offset_kw,
            "min_offset_kw must be <= max_offset_kw"
        );
        Self {
            floor_kw,
            min_offset_kw,
            max_offset_kw,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates an optimizer from the scenario's optimizer section.
    pub fn from_config(cfg: &OptimizerConfig) -> Self {
        Self::new(cfg.floor_kw, cfg.min_offset_kw, cfg.max_offset_kw, cfg.seed)
    }

    /// Runs the transform once: `max(floor, load - offset)` per element.
    ///
    /// Total over its domain; elements already below the floor are
    /// raised to it.
    pub fn optimize(&mut self, loads: &LoadVector) -> OptimizedVector {
        let mut out = [0u32; NUM_BUILDINGS];
        for (slot, kw) in out.iter_mut().zip(loads.values()) {
            let offset = self.rng.random_range(self.min_offset_kw..=self.max_offset_kw);
            *slot = kw.saturating_sub(offset).max(self.floor_kw);
        }
        LoadVector::new(out)
    }

    /// Runs one optimization and bundles the result into a [`RunRecord`].
    pub fn run(&mut self, run: usize, loads: &LoadVector) -> RunRecord {
        let after = self.optimize(loads);
        let metrics = compute_metrics(loads, &after);
        let floor_hits = after
            .values()
            .iter()
            .filter(|&&kw| kw == self.floor_kw)
            .count() as u32;
        RunRecord {
            run,
            before: *loads,
            after,
            metrics,
            floor_hits,
        }
    }
}

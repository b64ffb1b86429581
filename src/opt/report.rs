//! Post-hoc session reporting from optimization run records.

use std::fmt;

use super::types::RunRecord;

/// Aggregate figures derived from a complete optimization session.
///
/// Computed post-hoc from `&[RunRecord]` to ensure consistency between
/// run data and reported numbers.
#[derive(Debug, Clone)]
pub struct SessionReport {
    /// Number of optimization runs in the session.
    pub runs: usize,
    /// Mean total savings across runs (kW).
    pub mean_savings_kw: f64,
    /// Largest total savings of any single run (kW).
    pub best_savings_kw: i64,
    /// Mean peak reduction across runs (kW).
    pub mean_peak_reduction_kw: f64,
    /// Mean savings percentage across runs.
    pub mean_savings_percent: f64,
    /// Total number of elements clamped at the floor across runs.
    pub floor_hit_count: u64,
}

impl SessionReport {
    /// Computes the report from the complete run record slice.
    ///
    /// Returns a zeroed report for an empty slice.
    pub fn from_records(records: &[RunRecord]) -> Self {
        if records.is_empty() {
            return Self {
                runs: 0,
                mean_savings_kw: 0.0,
                best_savings_kw: 0,
                mean_peak_reduction_kw: 0.0,
                mean_savings_percent: 0.0,
                floor_hit_count: 0,
            };
        }

        let n = records.len() as f64;
        let mut savings_sum = 0.0_f64;
        let mut best_savings = i64::MIN;
        let mut peak_sum = 0.0_f64;
        let mut percent_sum = 0.0_f64;
        let mut floor_hits = 0_u64;

        for r in records {
            savings_sum += r.metrics.total_savings_kw as f64;
            best_savings = best_savings.max(r.metrics.total_savings_kw);
            peak_sum += r.metrics.peak_reduction_kw as f64;
            percent_sum += r.metrics.savings_percent;
            floor_hits += u64::from(r.floor_hits);
        }

        Self {
            runs: records.len(),
            mean_savings_kw: savings_sum / n,
            best_savings_kw: best_savings,
            mean_peak_reduction_kw: peak_sum / n,
            mean_savings_percent: percent_sum / n,
            floor_hit_count: floor_hits,
        }
    }
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Session Report ---")?;
        writeln!(f, "Runs:                   {}", self.runs)?;
        writeln!(f, "Total savings (mean):   {:.2} kW", self.mean_savings_kw)?;
        writeln!(f, "Total savings (best):   {} kW", self.best_savings_kw)?;
        writeln!(
            f,
            "Peak reduction (mean):  {:.2} kW",
            self.mean_peak_reduction_kw
        )?;
        writeln!(
            f,
            "Efficiency gain (mean): {:.2}%",
            self.mean_savings_percent
        )?;
        write!(f, "Floor hits:             {}", self.floor_hit_count)
    }
}

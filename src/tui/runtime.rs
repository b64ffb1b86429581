//! Dashboard application state.

use std::collections::VecDeque;

use crate::config::ScenarioConfig;
use crate::opt::optimizer::Optimizer;
use crate::opt::types::{LoadVector, NUM_BUILDINGS, RunRecord};

/// Maximum number of run records kept for the metrics panel.
const MAX_HISTORY: usize = 200;

/// TUI application state.
///
/// Two observable states: inputs set but not yet optimized (empty
/// history) and optimized (latest record drives the after-chart and
/// metrics panel). The optimizer runs only from the trigger key.
pub struct App {
    /// Active scenario configuration.
    pub scenario: ScenarioConfig,
    /// Seeded optimizer for this session.
    optimizer: Optimizer,
    /// Current per-building input loads (kW), clamped to the input range.
    pub loads: [u32; NUM_BUILDINGS],
    /// Index of the building whose slider is selected.
    pub selected: usize,
    /// Rolling history of optimization runs.
    pub history: VecDeque<RunRecord>,
    /// Total number of runs triggered this session.
    pub runs: usize,
    /// Whether the user has requested quit.
    pub quit: bool,
    /// Name of the active preset.
    pub preset_name: String,
}

impl App {
    /// Creates a new app from a preset name, falling back to neon.
    pub fn new(preset: &str) -> Self {
        let scenario =
            ScenarioConfig::from_preset(preset).unwrap_or_else(|_| ScenarioConfig::neon());
        Self::from_scenario(scenario, preset)
    }

    /// Creates a new app from a validated scenario.
    pub fn from_scenario(scenario: ScenarioConfig, preset_name: &str) -> Self {
        let optimizer = Optimizer::from_config(&scenario.optimizer);
        let loads = scenario.input.defaults;
        Self {
            scenario,
            optimizer,
            loads,
            selected: 0,
            history: VecDeque::with_capacity(MAX_HISTORY),
            runs: 0,
            quit: false,
            preset_name: preset_name.to_string(),
        }
    }

    /// Moves selection to the previous building, wrapping around.
    pub fn select_prev(&mut self) {
        self.selected = (self.selected + NUM_BUILDINGS - 1) % NUM_BUILDINGS;
    }

    /// Moves selection to the next building, wrapping around.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % NUM_BUILDINGS;
    }

    /// Adjusts the selected load by `delta_kw`, clamped to the input range.
    pub fn adjust(&mut self, delta_kw: i64) {
        let inp = &self.scenario.input;
        let next = (i64::from(self.loads[self.selected]) + delta_kw)
            .clamp(i64::from(inp.min_kw), i64::from(inp.max_kw));
        self.loads[self.selected] = next as u32;
    }

    /// Runs one optimization over the current loads.
    ///
    /// Reads the input state at trigger time; each run is independent
    /// and the previous optimized result is only kept as history.
    pub fn optimize(&mut self) {
        let loads = LoadVector::new(self.loads);
        let record = self.optimizer.run(self.runs, &loads);
        if self.history.len() >= MAX_HISTORY {
            self.history.pop_front();
        }
        self.history.push_back(record);
        self.runs += 1;
    }

    /// Resets loads to the preset defaults and clears all results.
    pub fn reset(&mut self) {
        self.loads = self.scenario.input.defaults;
        self.optimizer = Optimizer::from_config(&self.scenario.optimizer);
        self.history.clear();
        self.runs = 0;
        self.selected = 0;
    }

    /// Switches to a different preset, resetting all state.
    pub fn switch_preset(&mut self, name: &str) {
        let Ok(scenario) = ScenarioConfig::from_preset(name) else {
            return;
        };
        self.scenario = scenario;
        self.preset_name = name.to_string();
        self.reset();
    }

    /// Returns the most recent run record, if any.
    pub fn last_result(&self) -> Option<&RunRecord> {
        self.history.back()
    }

    /// Returns `true` once at least one optimization has run.
    pub fn is_optimized(&self) -> bool {
        !self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_starts_with_preset_defaults() {
        let app = App::new("neon");
        assert_eq!(app.loads, [60, 80, 45]);
        assert_eq!(app.selected, 0);
        assert!(!app.is_optimized());
    }

    #[test]
    fn unknown_preset_falls_back_to_neon() {
        let app = App::new("bogus");
        assert_eq!(app.loads, [60, 80, 45]);
    }

    #[test]
    fn adjust_clamps_to_input_range() {
        let mut app = App::new("neon");
        // neon bounds are [10, 120]
        for _ in 0..300 {
            app.adjust(1);
        }
        assert_eq!(app.loads[0], 120);
        for _ in 0..300 {
            app.adjust(-1);
        }
        assert_eq!(app.loads[0], 10);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut app = App::new("neon");
        app.select_prev();
        assert_eq!(app.selected, NUM_BUILDINGS - 1);
        app.select_next();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn optimize_appends_bounded_record() {
        let mut app = App::new("neon");
        app.optimize();
        assert_eq!(app.runs, 1);
        let record = app.last_result().unwrap();
        assert_eq!(record.before.values(), [60, 80, 45]);
        for (a, b) in record.after.values().iter().zip(record.before.values()) {
            assert!(*a >= app.scenario.optimizer.floor_kw);
            assert!(*a <= b);
        }
    }

    #[test]
    fn each_trigger_recomputes_independently() {
        let mut app = App::new("neon");
        app.optimize();
        app.optimize();
        app.optimize();
        assert_eq!(app.runs, 3);
        assert_eq!(app.history.len(), 3);
        // records keep their own run indices
        let runs: Vec<usize> = app.history.iter().map(|r| r.run).collect();
        assert_eq!(runs, vec![0, 1, 2]);
    }

    #[test]
    fn history_caps_at_max() {
        let mut app = App::new("neon");
        for _ in 0..(MAX_HISTORY + 50) {
            app.optimize();
        }
        assert_eq!(app.history.len(), MAX_HISTORY);
        assert_eq!(app.runs, MAX_HISTORY + 50);
    }

    #[test]
    fn reset_restores_defaults_and_clears_results() {
        let mut app = App::new("neon");
        app.adjust(20);
        app.optimize();
        app.reset();
        assert_eq!(app.loads, [60, 80, 45]);
        assert!(app.history.is_empty());
        assert_eq!(app.runs, 0);
    }

    #[test]
    fn switch_preset_resets_state() {
        let mut app = App::new("neon");
        app.optimize();
        app.switch_preset("aurora");
        assert_eq!(app.preset_name, "aurora");
        assert_eq!(app.loads, [55, 70, 40]);
        assert!(app.history.is_empty());
    }

    #[test]
    fn switch_to_unknown_preset_is_a_noop() {
        let mut app = App::new("neon");
        app.optimize();
        app.switch_preset("bogus");
        assert_eq!(app.preset_name, "neon");
        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn reset_reseeds_the_optimizer() {
        let mut app = App::new("neon");
        app.optimize();
        let first = app.last_result().unwrap().after;
        app.reset();
        app.optimize();
        let second = app.last_result().unwrap().after;
        // same seed, same loads, first draw of the sequence
        assert_eq!(first, second);
    }
}

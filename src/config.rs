//! TOML-based scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::opt::types::{LoadVector, NUM_BUILDINGS};

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the `neon` preset. Load from TOML
/// with [`ScenarioConfig::from_toml_file`] or use a named preset via
/// [`ScenarioConfig::from_preset`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Bounded input control parameters.
    #[serde(default)]
    pub input: InputConfig,
    /// Reduction transform parameters.
    #[serde(default)]
    pub optimizer: OptimizerConfig,
    /// Dashboard presentation parameters.
    #[serde(default)]
    pub ui: UiConfig,
}

/// Bounded input control parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Lower slider bound (kW).
    pub min_kw: u32,
    /// Upper slider bound (kW).
    pub max_kw: u32,
    /// Coarse adjustment step (kW).
    pub step_kw: u32,
    /// Default per-building loads (kW).
    pub defaults: [u32; NUM_BUILDINGS],
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            min_kw: 10,
            max_kw: 120,
            step_kw: 5,
            defaults: [60, 80, 45],
        }
    }
}

impl InputConfig {
    /// Checks that every element of `loads` lies in `[min_kw, max_kw]`.
    ///
    /// The bounded sliders make this unrepresentable in the TUI; loads
    /// arriving from the CLI or the API are checked here instead.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first out-of-range element.
    pub fn check_loads(&self, loads: &LoadVector) -> Result<(), ConfigError> {
        for (i, kw) in loads.values().iter().enumerate() {
            if *kw < self.min_kw || *kw > self.max_kw {
                return Err(ConfigError {
                    field: "loads".to_string(),
                    message: format!(
                        "element {i} is {kw} kW, outside [{}, {}]",
                        self.min_kw, self.max_kw
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Reduction transform parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptimizerConfig {
    /// Minimum value any optimized load may fall to (kW).
    pub floor_kw: u32,
    /// Smallest random offset (kW).
    pub min_offset_kw: u32,
    /// Largest random offset (kW).
    pub max_offset_kw: u32,
    /// Master random seed.
    pub seed: u64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            floor_kw: 10,
            min_offset_kw: 8,
            max_offset_kw: 24,
            seed: 42,
        }
    }
}

/// Dashboard presentation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Color theme: one of [`ScenarioConfig::THEMES`].
    pub theme: String,
    /// Dashboard title string.
    pub title: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "neon".to_string(),
            title: "Grid Control Room".to_string(),
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"input.min_kw"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl ScenarioConfig {
    /// Returns the neon preset (the default scenario).
    pub fn neon() -> Self {
        Self {
            input: InputConfig::default(),
            optimizer: OptimizerConfig::default(),
            ui: UiConfig::default(),
        }
    }

    /// Returns the aurora preset: narrower input range, gentler offsets.
    pub fn aurora() -> Self {
        Self {
            input: InputConfig {
                max_kw: 100,
                defaults: [55, 70, 40],
                ..InputConfig::default()
            },
            optimizer: OptimizerConfig {
                min_offset_kw: 6,
                max_offset_kw: 18,
                seed: 7,
                ..OptimizerConfig::default()
            },
            ui: UiConfig {
                theme: "aurora".to_string(),
                title: "Aurora Grid Panel".to_string(),
            },
        }
    }

    /// Returns the classic preset: plain styling, narrower input range.
    pub fn classic() -> Self {
        Self {
            input: InputConfig {
                max_kw: 100,
                ..InputConfig::default()
            },
            optimizer: OptimizerConfig::default(),
            ui: UiConfig {
                theme: "classic".to_string(),
                title: "Load Optimizer".to_string(),
            },
        }
    }

    /// Returns the midnight preset: heavier loads, aggressive offsets.
    pub fn midnight() -> Self {
        Self {
            input: InputConfig {
                defaults: [70, 90, 50],
                ..InputConfig::default()
            },
            optimizer: OptimizerConfig {
                min_offset_kw: 10,
                max_offset_kw: 30,
                seed: 21,
                ..OptimizerConfig::default()
            },
            ui: UiConfig {
                theme: "midnight".to_string(),
                title: "Midnight Grid Desk".to_string(),
            },
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["neon", "aurora", "classic", "midnight"];

    /// Known theme names.
    pub const THEMES: &[&str] = &["neon", "aurora", "classic", "midnight"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "neon" => Ok(Self::neon()),
            "aurora" => Ok(Self::aurora()),
            "classic" => Ok(Self::classic()),
            "midnight" => Ok(Self::midnight()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let inp = &self.input;

        if inp.min_kw >= inp.max_kw {
            errors.push(ConfigError {
                field: "input.min_kw".into(),
                message: "must be < input.max_kw".into(),
            });
        }
        if inp.step_kw == 0 {
            errors.push(ConfigError {
                field: "input.step_kw".into(),
                message: "must be > 0".into(),
            });
        }
        for (i, kw) in inp.defaults.iter().enumerate() {
            if *kw < inp.min_kw || *kw > inp.max_kw {
                errors.push(ConfigError {
                    field: format!("input.defaults[{i}]"),
                    message: format!("must be in [{}, {}]", inp.min_kw, inp.max_kw),
                });
            }
        }

        let opt = &self.optimizer;
        if opt.min_offset_kw > opt.max_offset_kw {
            errors.push(ConfigError {
                field: "optimizer.min_offset_kw".into(),
                message: "must be <= optimizer.max_offset_kw".into(),
            });
        }

        if !Self::THEMES.contains(&self.ui.theme.as_str()) {
            errors.push(ConfigError {
                field: "ui.theme".into(),
                message: format!(
                    "must be one of {}, got \"{}\"",
                    Self::THEMES.join(", "),
                    self.ui.theme
                ),
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neon_preset_valid() {
        let cfg = ScenarioConfig::neon();
        let errors = cfg.validate();
        assert!(errors.is_empty(), "neon should be valid: {errors:?}");
    }

    #[test]
    fn all_presets_are_valid() {
        for name in ScenarioConfig::PRESETS {
            let cfg = ScenarioConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let errors = cfg.as_ref().map(|c| c.validate()).unwrap_or_default();
            assert!(
                errors.is_empty(),
                "preset \"{name}\" should be valid: {errors:?}"
            );
        }
    }

    #[test]
    fn from_preset_unknown() {
        let err = ScenarioConfig::from_preset("nonexistent");
        assert!(err.is_err());
        let e = err.unwrap_err();
        assert!(e.message.contains("unknown preset"));
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[input]
min_kw = 10
max_kw = 100
step_kw = 5
defaults = [50, 60, 30]

[optimizer]
floor_kw = 10
min_offset_kw = 5
max_offset_kw = 20
seed = 99

[ui]
theme = "classic"
title = "Test Panel"
"#;
        let cfg = ScenarioConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.input.max_kw), Some(100));
        assert_eq!(cfg.as_ref().map(|c| c.optimizer.seed), Some(99));
        assert_eq!(cfg.as_ref().map(|c| &*c.ui.theme), Some("classic"));
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[input]
min_kw = 10
bogus_field = true
"#;
        let result = ScenarioConfig::from_toml_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[optimizer]
seed = 99
"#;
        let cfg = ScenarioConfig::from_toml_str(toml);
        assert!(cfg.is_ok());
        let cfg = cfg.ok();
        // seed overridden
        assert_eq!(cfg.as_ref().map(|c| c.optimizer.seed), Some(99));
        // input section kept defaults
        assert_eq!(cfg.as_ref().map(|c| c.input.max_kw), Some(120));
        assert_eq!(cfg.as_ref().map(|c| c.input.defaults), Some([60, 80, 45]));
    }

    #[test]
    fn validation_catches_inverted_input_range() {
        let mut cfg = ScenarioConfig::neon();
        cfg.input.min_kw = 200;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "input.min_kw"));
    }

    #[test]
    fn validation_catches_out_of_range_default() {
        let mut cfg = ScenarioConfig::neon();
        cfg.input.defaults = [60, 500, 45];
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "input.defaults[1]"));
    }

    #[test]
    fn validation_catches_inverted_offsets() {
        let mut cfg = ScenarioConfig::neon();
        cfg.optimizer.min_offset_kw = 30;
        cfg.optimizer.max_offset_kw = 8;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "optimizer.min_offset_kw"));
    }

    #[test]
    fn validation_catches_unknown_theme() {
        let mut cfg = ScenarioConfig::neon();
        cfg.ui.theme = "sepia".to_string();
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "ui.theme"));
    }

    #[test]
    fn check_loads_accepts_in_range() {
        let cfg = ScenarioConfig::neon();
        let loads = LoadVector::new([60, 80, 45]);
        assert!(cfg.input.check_loads(&loads).is_ok());
    }

    #[test]
    fn check_loads_rejects_out_of_range() {
        let cfg = ScenarioConfig::neon();
        let loads = LoadVector::new([60, 150, 45]);
        let err = cfg.input.check_loads(&loads);
        assert!(err.is_err());
        let e = err.unwrap_err();
        assert_eq!(e.field, "loads");
        assert!(e.message.contains("element 1"));
    }

    #[test]
    fn presets_differ_in_input_ranges() {
        let neon = ScenarioConfig::neon();
        let aurora = ScenarioConfig::aurora();
        assert!(aurora.input.max_kw < neon.input.max_kw);
        assert_ne!(aurora.ui.theme, neon.ui.theme);
    }

    #[test]
    fn midnight_has_aggressive_offsets() {
        let neon = ScenarioConfig::neon();
        let midnight = ScenarioConfig::midnight();
        assert!(midnight.optimizer.max_offset_kw > neon.optimizer.max_offset_kw);
    }
}

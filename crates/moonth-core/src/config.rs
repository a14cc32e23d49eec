//! Configuration loading and typed config structures for the Moonth engine.
//!
//! The configuration lives in `moonth-config.yaml` at the project root. This
//! module defines strongly-typed structs that mirror the YAML structure and a
//! loader that reads the file. Every field has a default matching the
//! canonical model, so an empty or missing file yields the standard cycle.
//!
//! Semantic checks (adjacency of transitions, buffer total) happen when the
//! config is turned into a [`PhaseCycle`], not while parsing.

use std::path::Path;

use moonth_types::Phase;
use serde::Deserialize;

use crate::constants::KernelConstants;
use crate::error::MoonthError;
use crate::phase::{
    DEFAULT_BUFFER_TOTAL_HOURS, DEFAULT_PHASE_QUANTUM_HOURS, DEFAULT_TRANSITIONS, PhaseCycle,
    Transition,
};
use crate::resonance::DEFAULT_SEARCH_RANGE;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MoonthConfig {
    /// Phase model: quantum, buffer total, transition table.
    #[serde(default)]
    pub model: ModelConfig,

    /// Resonance search parameters.
    #[serde(default)]
    pub resonance: ResonanceConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MoonthConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }
}

/// Phase model configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelConfig {
    /// Nominal duration of each phase, in hours.
    #[serde(default = "default_phase_quantum_hours")]
    pub phase_quantum_hours: f64,

    /// Declared sum of all transition impedances, in hours.
    #[serde(default = "default_buffer_total_hours")]
    pub buffer_total_hours: f64,

    /// Transition table; must hold exactly the five cyclic-adjacent pairs.
    #[serde(default = "default_transitions")]
    pub transitions: Vec<TransitionConfig>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            phase_quantum_hours: default_phase_quantum_hours(),
            buffer_total_hours: default_buffer_total_hours(),
            transitions: default_transitions(),
        }
    }
}

impl ModelConfig {
    /// Build the validated phase cycle described by this config.
    ///
    /// # Errors
    ///
    /// Returns [`MoonthError::InvalidModel`] if a phase name is unknown or
    /// the resulting table fails [`PhaseCycle::from_parts`] validation.
    pub fn build_cycle(&self, constants: &KernelConstants) -> Result<PhaseCycle, MoonthError> {
        let transitions = self
            .transitions
            .iter()
            .map(|t| {
                Ok(Transition::new(
                    parse_phase(&t.from)?,
                    parse_phase(&t.to)?,
                    t.hours,
                ))
            })
            .collect::<Result<Vec<_>, MoonthError>>()?;
        PhaseCycle::from_parts(
            constants,
            self.phase_quantum_hours,
            self.buffer_total_hours,
            &transitions,
        )
    }
}

/// One row of the transition table, with phases named as strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransitionConfig {
    /// Phase being left.
    pub from: String,
    /// Phase being entered.
    pub to: String,
    /// Impedance in hours.
    pub hours: f64,
}

/// Resonance search configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResonanceConfig {
    /// Base duration every projection is seeded with, in hours.
    #[serde(default = "default_phase_quantum_hours")]
    pub base_hours: f64,

    /// Symmetric bound on the scale index.
    #[serde(default = "default_search_range")]
    pub search_range: i32,

    /// Survey entries whose proximity differs from the published fixture
    /// by more than this are logged as warnings.
    #[serde(default = "default_divergence_warning")]
    pub divergence_warning: f64,
}

impl Default for ResonanceConfig {
    fn default() -> Self {
        Self {
            base_hours: default_phase_quantum_hours(),
            search_range: default_search_range(),
            divergence_warning: default_divergence_warning(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Parse a phase name case-insensitively.
///
/// # Errors
///
/// Returns [`MoonthError::InvalidModel`] if the name is not a phase.
pub fn parse_phase(name: &str) -> Result<Phase, MoonthError> {
    match name.trim().to_lowercase().as_str() {
        "opening" => Ok(Phase::Opening),
        "rise" => Ok(Phase::Rise),
        "expansion" => Ok(Phase::Expansion),
        "descent" => Ok(Phase::Descent),
        "integration" => Ok(Phase::Integration),
        other => Err(MoonthError::InvalidModel {
            reason: format!("unknown phase: {other}"),
        }),
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_phase_quantum_hours() -> f64 {
    DEFAULT_PHASE_QUANTUM_HOURS
}

const fn default_buffer_total_hours() -> f64 {
    DEFAULT_BUFFER_TOTAL_HOURS
}

fn default_transitions() -> Vec<TransitionConfig> {
    DEFAULT_TRANSITIONS
        .iter()
        .map(|t| TransitionConfig {
            from: format!("{:?}", t.from).to_lowercase(),
            to: format!("{:?}", t.to).to_lowercase(),
            hours: t.impedance_hours,
        })
        .collect()
}

const fn default_search_range() -> i32 {
    DEFAULT_SEARCH_RANGE
}

const fn default_divergence_warning() -> f64 {
    0.05
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config = MoonthConfig::parse("").unwrap();
        assert_eq!(config, MoonthConfig::default());
        assert_eq!(config.resonance.search_range, 10);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.model.transitions.len(), 5);
    }

    #[test]
    fn default_model_builds_canonical_cycle() {
        let cycle = ModelConfig::default()
            .build_cycle(&KernelConstants::new())
            .unwrap();
        let duration = cycle.total_cycle_duration();
        assert!((duration.total_hours - 696.0).abs() < 1e-9);
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let yaml = "
resonance:
  search_range: 4
logging:
  level: debug
";
        let config = MoonthConfig::parse(yaml).unwrap();
        assert_eq!(config.resonance.search_range, 4);
        assert!((config.resonance.base_hours - 137.0).abs() < f64::EPSILON);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.model, ModelConfig::default());
    }

    #[test]
    fn custom_transition_table_parses_case_insensitively() {
        let yaml = "
model:
  phase_quantum_hours: 100.0
  buffer_total_hours: 10.0
  transitions:
    - { from: Opening, to: RISE, hours: 2.0 }
    - { from: rise, to: expansion, hours: 2.0 }
    - { from: expansion, to: descent, hours: 2.0 }
    - { from: descent, to: integration, hours: 2.0 }
    - { from: integration, to: opening, hours: 2.0 }
";
        let config = MoonthConfig::parse(yaml).unwrap();
        let cycle = config.model.build_cycle(&KernelConstants::new()).unwrap();
        assert!((cycle.total_cycle_duration().total_hours - 510.0).abs() < 1e-9);
    }

    #[test]
    fn skipping_transition_in_config_is_rejected() {
        let yaml = "
model:
  transitions:
    - { from: opening, to: expansion, hours: 11.0 }
";
        let config = MoonthConfig::parse(yaml).unwrap();
        let result = config.model.build_cycle(&KernelConstants::new());
        assert!(matches!(result, Err(MoonthError::InvalidModel { .. })));
    }

    #[test]
    fn unknown_phase_name_is_rejected() {
        assert!(parse_phase("twilight").is_err());
        assert_eq!(parse_phase(" Descent ").unwrap(), Phase::Descent);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let result = MoonthConfig::parse("resonance: [unclosed");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }
}

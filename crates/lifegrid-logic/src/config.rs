//! Run configuration for a simulation.
//!
//! A `RunConfig` says how big the board is, how it is seeded, and how long
//! to run. The starting pattern, when given, is stored in its encoded form,
//! so a bad pattern in a config file fails at deserialization with the
//! codec's error message.
//!
//! ```
//! use lifegrid_logic::config::{initial_grid, validate_config, RunConfig};
//!
//! let mut config = RunConfig::default();
//! config.size = 3;
//! config.initial = Some("000111000".parse().unwrap());
//! assert!(validate_config(&config).is_empty());
//! assert_eq!(initial_grid(&config).live_count(), 3);
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::simulation::DEFAULT_HISTORY_DEPTH;

/// Largest board a config may ask for.
pub const MAX_CONFIG_SIZE: usize = 256;

/// Parameters for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Board side length. Ignored in favour of `initial` when that is set,
    /// but the two must agree.
    pub size: usize,
    /// Maximum number of generations to run.
    pub generations: u64,
    /// Seed for the random starting grid (None = thread RNG).
    pub seed: Option<u64>,
    /// Explicit starting grid, encoded as a `'0'`/`'1'` string.
    pub initial: Option<Grid>,
    /// Stop as soon as a repeated grid is found.
    pub stop_on_cycle: bool,
    /// How many past generations are kept for cycle detection.
    pub history_depth: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            size: 16,
            generations: 100,
            seed: None,
            initial: None,
            stop_on_cycle: true,
            history_depth: DEFAULT_HISTORY_DEPTH,
        }
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Board larger than `MAX_CONFIG_SIZE`.
    SizeTooLarge(usize),
    /// Starting grid side differs from `size`.
    InitialSizeMismatch { expected: usize, found: usize },
    /// Cycle stopping requested with no history to detect cycles in.
    ZeroHistoryDepth,
}

/// Validate a run configuration, returning all errors found.
pub fn validate_config(config: &RunConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if config.size > MAX_CONFIG_SIZE {
        errors.push(ConfigError::SizeTooLarge(config.size));
    }
    if let Some(initial) = &config.initial {
        if initial.size() != config.size {
            errors.push(ConfigError::InitialSizeMismatch {
                expected: config.size,
                found: initial.size(),
            });
        }
    }
    if config.stop_on_cycle && config.history_depth == 0 {
        errors.push(ConfigError::ZeroHistoryDepth);
    }

    errors
}

/// Starting grid for a run: the explicit pattern if present, else a random
/// grid (seeded when `seed` is set).
pub fn initial_grid(config: &RunConfig) -> Grid {
    match (&config.initial, config.seed) {
        (Some(grid), _) => grid.clone(),
        (None, Some(seed)) => Grid::random(config.size, &mut StdRng::seed_from_u64(seed)),
        (None, None) => Grid::new_random(config.size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = RunConfig::default();
        let errors = validate_config(&config);
        assert!(errors.is_empty(), "default config should be valid: {errors:?}");
    }

    #[test]
    fn size_too_large() {
        let config = RunConfig {
            size: 1000,
            ..RunConfig::default()
        };
        assert!(validate_config(&config).contains(&ConfigError::SizeTooLarge(1000)));
    }

    #[test]
    fn initial_size_mismatch() {
        let config = RunConfig {
            size: 4,
            initial: Some("000111000".parse().unwrap()),
            ..RunConfig::default()
        };
        assert!(validate_config(&config).contains(&ConfigError::InitialSizeMismatch {
            expected: 4,
            found: 3,
        }));
    }

    #[test]
    fn zero_history_only_matters_when_stopping() {
        let mut config = RunConfig {
            history_depth: 0,
            ..RunConfig::default()
        };
        assert!(validate_config(&config).contains(&ConfigError::ZeroHistoryDepth));
        config.stop_on_cycle = false;
        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn reports_every_error() {
        let config = RunConfig {
            size: 300,
            initial: Some("1".parse().unwrap()),
            history_depth: 0,
            ..RunConfig::default()
        };
        assert_eq!(validate_config(&config).len(), 3);
    }

    #[test]
    fn initial_pattern_wins_over_seed() {
        let pattern: Grid = "0110".parse().unwrap();
        let config = RunConfig {
            size: 2,
            seed: Some(9),
            initial: Some(pattern.clone()),
            ..RunConfig::default()
        };
        assert_eq!(initial_grid(&config), pattern);
    }

    #[test]
    fn seeded_config_is_reproducible() {
        let config = RunConfig {
            size: 20,
            seed: Some(1234),
            ..RunConfig::default()
        };
        assert_eq!(initial_grid(&config), initial_grid(&config));
        assert_eq!(initial_grid(&config).size(), 20);
    }

    #[test]
    fn unseeded_config_has_requested_size() {
        let config = RunConfig {
            size: 5,
            ..RunConfig::default()
        };
        assert_eq!(initial_grid(&config).size(), 5);
    }

    #[test]
    fn json_missing_fields_use_defaults() {
        let config: RunConfig = serde_json::from_str(r#"{"size": 3, "initial": "010010010"}"#).unwrap();
        assert_eq!(config.generations, 100);
        assert!(config.stop_on_cycle);
        assert_eq!(config.initial.map(|g| g.live_count()), Some(3));
    }

    #[test]
    fn json_bad_pattern_is_rejected() {
        let err = serde_json::from_str::<RunConfig>(r#"{"size": 2, "initial": "01a0"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid character"), "{err}");
    }
}

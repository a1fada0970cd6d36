//! Rules configuration: spawn/ramp tuning and the starting layout.

use crate::board::StartingLayout;
use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    #[error("{name} ({value}) exceeds its cap ({cap})")]
    AboveCap {
        name: &'static str,
        value: f64,
        cap: f64,
    },

    #[error("ramp_interval must be at least 1")]
    ZeroRampInterval,

    #[error("failed to read rules config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse rules config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tuning knobs for the spawn and difficulty policy.
///
/// Missing fields in a config file fall back to the defaults, which are the
/// values in [`crate::constants`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub initial_spawn_rate: f64,
    pub spawn_rate_step: f64,
    pub spawn_rate_cap: f64,

    pub initial_special_chance: f64,
    pub special_chance_step: f64,
    pub special_chance_cap: f64,

    /// The ramp fires on turns divisible by this.
    pub ramp_interval: u32,

    /// First turn on which enemy sliders may roam into the middle rows.
    pub middle_rows_unlock_turn: u32,

    pub layout: StartingLayout,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            initial_spawn_rate: INITIAL_SPAWN_RATE,
            spawn_rate_step: SPAWN_RATE_STEP,
            spawn_rate_cap: SPAWN_RATE_CAP,
            initial_special_chance: INITIAL_SPECIAL_CHANCE,
            special_chance_step: SPECIAL_CHANCE_STEP,
            special_chance_cap: SPECIAL_CHANCE_CAP,
            ramp_interval: RAMP_INTERVAL_TURNS,
            middle_rows_unlock_turn: MIDDLE_ROWS_UNLOCK_TURN,
            layout: StartingLayout::BackRank,
        }
    }
}

impl RulesConfig {
    /// Config with spawning switched off entirely. Handy for scripted scenarios.
    pub fn no_spawns() -> Self {
        Self {
            initial_spawn_rate: 0.0,
            spawn_rate_step: 0.0,
            ..Default::default()
        }
    }

    pub fn with_layout(layout: StartingLayout) -> Self {
        Self {
            layout,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let probabilities = [
            ("initial_spawn_rate", self.initial_spawn_rate),
            ("spawn_rate_step", self.spawn_rate_step),
            ("spawn_rate_cap", self.spawn_rate_cap),
            ("initial_special_chance", self.initial_special_chance),
            ("special_chance_step", self.special_chance_step),
            ("special_chance_cap", self.special_chance_cap),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { name, value });
            }
        }

        if self.initial_spawn_rate > self.spawn_rate_cap {
            return Err(ConfigError::AboveCap {
                name: "initial_spawn_rate",
                value: self.initial_spawn_rate,
                cap: self.spawn_rate_cap,
            });
        }
        if self.initial_special_chance > self.special_chance_cap {
            return Err(ConfigError::AboveCap {
                name: "initial_special_chance",
                value: self.initial_special_chance,
                cap: self.special_chance_cap,
            });
        }

        if self.ramp_interval == 0 {
            return Err(ConfigError::ZeroRampInterval);
        }

        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: RulesConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RulesConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_spawn_rate, 0.3);
        assert_eq!(config.spawn_rate_cap, 0.7);
        assert_eq!(config.initial_special_chance, 0.2);
        assert_eq!(config.special_chance_cap, 0.4);
        assert_eq!(config.ramp_interval, 5);
        assert_eq!(config.middle_rows_unlock_turn, 10);
        assert_eq!(config.layout, StartingLayout::BackRank);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            RulesConfig::from_json_str(r#"{"initial_spawn_rate": 0.5, "layout": "FullArmy"}"#)
                .unwrap();
        assert_eq!(config.initial_spawn_rate, 0.5);
        assert_eq!(config.layout, StartingLayout::FullArmy);
        assert_eq!(config.spawn_rate_cap, SPAWN_RATE_CAP);
    }

    #[test]
    fn test_rejects_probability_out_of_range() {
        let err = RulesConfig::from_json_str(r#"{"special_chance_cap": 1.5}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ProbabilityOutOfRange {
                name: "special_chance_cap",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_initial_above_cap() {
        let config = RulesConfig {
            initial_spawn_rate: 0.9,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::AboveCap {
                name: "initial_spawn_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_zero_ramp_interval() {
        let config = RulesConfig {
            ramp_interval: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroRampInterval)
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = RulesConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_no_spawns_config() {
        let config = RulesConfig::no_spawns();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_spawn_rate, 0.0);
        assert_eq!(config.spawn_rate_step, 0.0);
    }
}

//! session tuning, loadable from json
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use tracing::warn;

/// Tunables for a play session. Missing json fields fall back to the defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// cells per side of the square field
    pub grid_size: u8,
    /// snake length at the start of every level
    pub initial_length: usize,
    /// seconds per grid step on the first level
    pub tick_period: f32,
    /// how much faster each level gets, in seconds per step
    pub tick_period_step: f32,
    /// floor for the tick period however far the player gets
    pub min_tick_period: f32,
    /// food to eat on the first level
    pub base_food_quota: u32,
    /// extra food required per level
    pub food_quota_step: u32,
    /// number of levels, finishing the last one wins the game
    pub level_count: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            grid_size: 10,
            initial_length: 3,
            tick_period: 0.4,
            tick_period_step: 0.1,
            min_tick_period: 0.1,
            base_food_quota: 3,
            food_quota_step: 2,
            level_count: 4,
        }
    }
}

/// The numbers derived for one level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelSettings {
    /// seconds per grid step
    pub tick_period: f32,
    /// food to eat before the level is done
    pub food_quota: u32,
    /// `1 - tick_period`, see [`crate::snake::SnakeBody`]
    pub intersection_threshold: f32,
}

impl SessionConfig {
    /// parses and validates a json config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// checks the values make for a playable session
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 2 {
            return Err(ConfigError::invalid("grid_size", "needs at least 2 cells per side"));
        }
        if self.initial_length == 0 || self.initial_length > self.grid_size as usize {
            return Err(ConfigError::invalid(
                "initial_length",
                format!("must be within 1..={}", self.grid_size),
            ));
        }
        if !(self.tick_period > 0.0) {
            return Err(ConfigError::invalid("tick_period", "must be positive"));
        }
        if !(self.min_tick_period > 0.0) {
            return Err(ConfigError::invalid("min_tick_period", "must be positive"));
        }
        if !(self.tick_period_step >= 0.0) {
            return Err(ConfigError::invalid("tick_period_step", "must not be negative"));
        }
        if self.base_food_quota == 0 {
            return Err(ConfigError::invalid("base_food_quota", "must be at least 1"));
        }
        if self.level_count == 0 {
            return Err(ConfigError::invalid("level_count", "needs at least one level"));
        }
        if self.tick_period >= 1.0 {
            // the threshold shrinks to nothing, collisions only register once a cell is committed
            warn!(
                tick_period = self.tick_period,
                "tick period of a second or more leaves no intersection threshold"
            );
        }
        Ok(())
    }

    /// settings for the zero based `level`
    pub fn level(&self, level: usize) -> LevelSettings {
        let tick_period =
            (self.tick_period - self.tick_period_step * level as f32).max(self.min_tick_period);
        LevelSettings {
            tick_period,
            food_quota: self.base_food_quota + self.food_quota_step * level as u32,
            intersection_threshold: 1.0 - tick_period,
        }
    }
}

/// Errors from loading a config or restoring progress
#[derive(Debug)]
pub enum ConfigError {
    /// the json did not parse
    Parse(serde_json::Error),
    /// a field holds a value the session can't run with
    Invalid {
        /// the offending field
        field: &'static str,
        /// what is wrong with it
        reason: String,
    },
    /// a restored level index past the configured levels
    LevelOutOfRange {
        #[allow(missing_docs)]
        level: usize,
        #[allow(missing_docs)]
        level_count: usize,
    },
    /// a level was restored while one is being played or is paused
    LevelInProgress,
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "could not parse config: {}", e),
            ConfigError::Invalid { field, reason } => write!(f, "invalid {}: {}", field, reason),
            ConfigError::LevelOutOfRange { level, level_count } => write!(
                f,
                "level {} is out of range, there are {} levels",
                level, level_count
            ),
            ConfigError::LevelInProgress => {
                write!(f, "can't restore a level while one is in progress")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fixture_matches_default() {
        let config = SessionConfig::from_json(include_str!("../../fixtures/default_config.json"))
            .expect("the json literal is valid");
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = SessionConfig::from_json(r#"{"grid_size": 16, "level_count": 2}"#).unwrap();
        assert_eq!(config.grid_size, 16);
        assert_eq!(config.level_count, 2);
        assert_eq!(config.initial_length, 3);
    }

    #[test]
    fn test_levels_speed_up_and_need_more_food() {
        let config = SessionConfig::default();
        let first = config.level(0);
        let second = config.level(1);
        assert_eq!(first.tick_period, 0.4);
        assert_eq!(first.food_quota, 3);
        assert_eq!(second.food_quota, 5);
        assert!(second.tick_period < first.tick_period);
        assert!((second.tick_period - 0.3).abs() < 1e-6);
        assert!((first.intersection_threshold - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_tick_period_has_a_floor() {
        let config = SessionConfig::default();
        assert_eq!(config.level(10).tick_period, config.min_tick_period);
    }

    #[test]
    fn test_rejects_bad_values() {
        let too_long = SessionConfig {
            initial_length: 11,
            ..SessionConfig::default()
        };
        assert!(matches!(
            too_long.validate(),
            Err(ConfigError::Invalid { field: "initial_length", .. })
        ));

        let frozen = SessionConfig {
            tick_period: 0.0,
            ..SessionConfig::default()
        };
        assert!(matches!(
            frozen.validate(),
            Err(ConfigError::Invalid { field: "tick_period", .. })
        ));
    }

    #[test]
    fn test_slow_tick_is_accepted() {
        let slow = SessionConfig {
            tick_period: 1.5,
            ..SessionConfig::default()
        };
        assert!(slow.validate().is_ok());
        assert!(slow.level(0).intersection_threshold < 0.0);
    }

    #[test]
    fn test_parse_errors_chain() {
        let err = SessionConfig::from_json(r#"{"grid_size": "big"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.source().is_some());

        let err = SessionConfig::from_json(r#"{"speed": 3}"#).unwrap_err();
        assert!(err.to_string().starts_with("could not parse config"));
    }
}

//! Data-driven session knobs
//!
//! Geometry is fixed (see [`crate::consts`]); the handful of values a host
//! might want to rebalance live here and round-trip through JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Rejected configuration values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `bug_speeds` has nothing to draw from
    EmptySpeedTable,
    /// A session needs at least one life
    ZeroLives,
    /// A session needs a non-zero countdown
    ZeroRoundSeconds,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptySpeedTable => write!(f, "bug_speeds must not be empty"),
            ConfigError::ZeroLives => write!(f, "max_lives must be at least 1"),
            ConfigError::ZeroRoundSeconds => write!(f, "round_seconds must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Tunable parameters for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Lives per session
    pub max_lives: u32,
    /// Countdown ceiling in seconds
    pub round_seconds: u32,
    /// Points per gem
    pub gem_reward: u32,
    /// Bugs per session
    pub bug_count: usize,
    /// Gems per batch
    pub gem_count: usize,
    /// Bug speeds are drawn uniformly from this table (px/s)
    pub bug_speeds: Vec<f32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_lives: MAX_LIVES,
            round_seconds: ROUND_SECONDS,
            gem_reward: GEM_REWARD,
            bug_count: MAX_BUGS,
            gem_count: MAX_GEMS,
            bug_speeds: BUG_SPEEDS.to_vec(),
        }
    }
}

impl GameConfig {
    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bug_speeds.is_empty() {
            return Err(ConfigError::EmptySpeedTable);
        }
        if self.max_lives == 0 {
            return Err(ConfigError::ZeroLives);
        }
        if self.round_seconds == 0 {
            return Err(ConfigError::ZeroRoundSeconds);
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        use serde::de::Error as _;

        let config: Self = serde_json::from_str(json)?;
        config.validate().map_err(serde_json::Error::custom)?;
        Ok(config)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_game() {
        let config = GameConfig::default();
        assert_eq!(config.max_lives, 5);
        assert_eq!(config.round_seconds, 30);
        assert_eq!(config.gem_reward, 5);
        assert_eq!(config.bug_count, 3);
        assert_eq!(config.gem_count, 3);
        assert_eq!(config.bug_speeds, vec![80.0, 100.0, 120.0]);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config = GameConfig::from_json(r#"{ "max_lives": 3 }"#).unwrap();
        assert_eq!(config.max_lives, 3);
        assert_eq!(config.round_seconds, 30);
    }

    #[test]
    fn test_empty_speed_table_is_rejected() {
        let mut config = GameConfig::default();
        config.bug_speeds.clear();
        assert_eq!(config.validate(), Err(ConfigError::EmptySpeedTable));
        assert!(GameConfig::from_json(r#"{ "bug_speeds": [] }"#).is_err());
    }

    #[test]
    fn test_zero_knobs_are_rejected() {
        let mut config = GameConfig::default();
        config.max_lives = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroLives));

        let mut config = GameConfig::default();
        config.round_seconds = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroRoundSeconds));

        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = GameConfig::default();
        config.gem_reward = 10;
        let json = config.to_json().unwrap();
        let back = GameConfig::from_json(&json).unwrap();
        assert_eq!(back.gem_reward, 10);
        assert_eq!(back.bug_speeds, config.bug_speeds);
    }
}

//! Startup configuration
//!
//! Loaded once before the first tick and treated as constant for the run.
//! Anything malformed fails here instead of inside the tick loop.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DOT_SPEED_LIMIT, PLAYER_SPEED, SPAWN_MARGIN};

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{axis} must be a positive finite number, got {value}")]
    InvalidExtent { axis: &'static str, value: f64 },

    #[error("player speed must be a positive finite number, got {0}")]
    InvalidPlayerSpeed(f64),

    #[error("{axis} of {value} is smaller than the per-tick travel bound {bound}")]
    ExtentTooSmall {
        axis: &'static str,
        value: f64,
        bound: f64,
    },

    #[error("a {width}x{height} domain is covered by the spawn exclusion zone (radius {radius}) below the win radius")]
    ExclusionZoneTooLarge { width: f64, height: f64, radius: f64 },

    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Domain and player settings for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Domain width (pixels)
    pub width: f64,
    /// Domain height (pixels)
    pub height: f64,
    /// Player movement speed (pixels per tick)
    pub player_speed: f64,
    /// Run seed; `None` lets the front-end pick one
    pub seed: Option<u64>,
    /// Ticks the native headless runner simulates before giving up
    pub headless_ticks: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            player_speed: PLAYER_SPEED,
            seed: None,
            headless_ticks: 20_000,
        }
    }
}

impl GameConfig {
    /// Config for a domain of the given size, other fields default
    pub fn with_extents(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Radius at which the player wins
    pub fn win_radius(&self) -> f64 {
        self.width.min(self.height) / 2.0
    }

    /// Validate configuration before any state is built
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidExtent { axis, value });
            }
        }

        if !self.player_speed.is_finite() || self.player_speed <= 0.0 {
            return Err(ConfigError::InvalidPlayerSpeed(self.player_speed));
        }

        // Wrap assumes nothing leaves the domain by more than one extent per tick
        let bound = self.player_speed.max(DOT_SPEED_LIMIT);
        for (axis, value) in [("width", self.width), ("height", self.height)] {
            if value <= bound {
                return Err(ConfigError::ExtentTooSmall { axis, value, bound });
            }
        }

        // A fresh run must leave room to spawn dots around a near-winning
        // player at the center
        let radius = self.win_radius() + SPAWN_MARGIN;
        if radius >= self.width.hypot(self.height) / 2.0 {
            return Err(ConfigError::ExclusionZoneTooLarge {
                width: self.width,
                height: self.height,
                radius,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.player_speed, 2.0);
        assert_eq!(config.win_radius(), 300.0);
    }

    #[test]
    fn test_rejects_bad_extents() {
        let config = GameConfig::with_extents(0.0, 600.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidExtent { axis: "width", .. })
        ));

        let config = GameConfig::with_extents(800.0, f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidExtent { axis: "height", .. })
        ));

        let config = GameConfig::with_extents(-10.0, 600.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_speed() {
        let config = GameConfig {
            player_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPlayerSpeed(_))
        ));

        let config = GameConfig {
            player_speed: f64::INFINITY,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_domain_below_travel_bound() {
        let config = GameConfig::with_extents(1.5, 600.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ExtentTooSmall { axis: "width", .. })
        ));
    }

    #[test]
    fn test_rejects_tiny_square_domain() {
        // 20 + 10 reaches past the 28.3 half-diagonal
        let config = GameConfig::with_extents(40.0, 40.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ExclusionZoneTooLarge { .. })
        ));
    }

    #[test]
    fn test_accepts_small_domain_with_spawn_room() {
        // 35 is short of the 35.36 half-diagonal
        assert!(GameConfig::with_extents(50.0, 50.0).validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{ "width": 1024, "seed": 7 }"#).unwrap();
        assert_eq!(config.width, 1024.0);
        assert_eq!(config.height, 600.0);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.player_speed, 2.0);
    }

    #[test]
    fn test_from_json_validates() {
        let err = GameConfig::from_json(r#"{ "player_speed": -1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPlayerSpeed(_)));

        let err = GameConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_missing_file() {
        let err = GameConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}

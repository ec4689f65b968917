//! Game configuration.

use crate::engine::Engine;
use crate::error::EngineError;
use crate::layout::{self, DEFAULT_RADIUS, MAX_RADIUS};
use crate::types::Stone;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Settings for starting a game on a hexagon board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Board radius; radius 0 is a single cell.
    #[serde(default = "default_radius")]
    radius: u32,

    /// Color that moves first.
    #[serde(default = "default_first_mover")]
    first_mover: Stone,
}

#[instrument]
fn default_radius() -> u32 {
    DEFAULT_RADIUS
}

#[instrument]
fn default_first_mover() -> Stone {
    Stone::Red
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            first_mover: default_first_mover(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(radius = config.radius, first_mover = %config.first_mover, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    ///
    /// Rejects a radius above [`MAX_RADIUS`].
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the settings describe a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.radius > MAX_RADIUS {
            warn!(radius = self.radius, max = MAX_RADIUS, "Radius out of range");
            return Err(ConfigError::new(format!(
                "Radius {} exceeds the maximum of {}",
                self.radius, MAX_RADIUS
            )));
        }
        Ok(())
    }

    /// Starts a game on a hexagon board of the configured radius.
    ///
    /// # Errors
    ///
    /// [`EngineError::RadiusTooLarge`] above [`MAX_RADIUS`].
    #[instrument(skip(self), fields(radius = self.radius, first_mover = %self.first_mover))]
    pub fn build_engine(&self) -> Result<Engine, EngineError> {
        Engine::new(layout::hexagon(self.radius)?, self.first_mover)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

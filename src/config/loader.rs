use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, MAX_COUNTDOWN_FROM, MAX_LAUNCH_UNITS, MAX_TIME_UNIT_MS};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/breathe/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("breathe").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - All durations and counts are positive and bounded, so the timers
    ///   built from them can never overflow an `Instant`
    /// - `max_size` is a positive multiple of `step`, so the circle lands
    ///   exactly on both bounds
    pub fn validate(&self) -> Result<(), ConfigError> {
        let timing = &self.timing;
        if timing.time_unit_ms == 0 {
            return Err(validation("time_unit_ms must be greater than zero"));
        }
        if timing.launch_units == 0 {
            return Err(validation("launch_units must be greater than zero"));
        }
        if timing.countdown_from == 0 {
            return Err(validation("countdown_from must be at least 1"));
        }
        if timing.time_unit_ms > MAX_TIME_UNIT_MS {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "time_unit_ms ({}) must be at most {}",
                    timing.time_unit_ms, MAX_TIME_UNIT_MS
                ),
            });
        }
        if timing.launch_units > MAX_LAUNCH_UNITS {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "launch_units ({}) must be at most {}",
                    timing.launch_units, MAX_LAUNCH_UNITS
                ),
            });
        }
        if timing.countdown_from > MAX_COUNTDOWN_FROM {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "countdown_from ({}) must be at most {}",
                    timing.countdown_from, MAX_COUNTDOWN_FROM
                ),
            });
        }

        let breathing = &self.breathing;
        if breathing.step == 0 {
            return Err(validation("step must be greater than zero"));
        }
        if breathing.max_size == 0 || breathing.max_size % breathing.step != 0 {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "max_size ({}) must be a positive multiple of step ({})",
                    breathing.max_size, breathing.step
                ),
            });
        }

        Ok(())
    }
}

fn validation(message: &str) -> ConfigError {
    ConfigError::ValidationError {
        message: message.to_string(),
    }
}

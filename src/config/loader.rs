use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::alert::{Alert, AlertError};
use crate::config::types::Config;

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

    #[error("Invalid preset '{name}': {source}")]
    Preset {
        name: String,
        #[source]
        source: AlertError,
    },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/alertkit/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("alertkit").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
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
        tracing::info!(path = %path.display(), presets = config.presets.len(), "config loaded");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Preset names are non-empty and unique
    /// - Every preset describes a valid alert
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names = HashSet::new();
        for preset in &self.presets {
            if preset.name.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("Preset titled '{}' has an empty name", preset.title),
                });
            }
            if !names.insert(preset.name.as_str()) {
                return Err(ConfigError::ValidationError {
                    message: format!("Duplicate preset name '{}'", preset.name),
                });
            }
        }
        self.alerts().map(|_| ())
    }

    /// Convert every preset into a typed alert, keyed by preset name.
    pub fn alerts(&self) -> Result<Vec<(String, Alert<String>)>, ConfigError> {
        self.presets
            .iter()
            .map(|preset| {
                Alert::<String>::try_from(preset)
                    .map(|alert| (preset.name.clone(), alert))
                    .map_err(|source| ConfigError::Preset {
                        name: preset.name.clone(),
                        source,
                    })
            })
            .collect()
    }
}

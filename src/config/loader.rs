use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

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
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/anylocale/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config directory is known.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("anylocale").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
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
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - At least one supported locale is listed
    /// - Supported tags are unique
    pub fn validate(&self) -> Result<(), ConfigError> {
        let options = self.locale.supported.options();
        if options.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one supported locale must be configured".to_string(),
            });
        }

        for (index, option) in options.iter().enumerate() {
            if options[..index].iter().any(|o| o.tag == option.tag) {
                return Err(ConfigError::ValidationError {
                    message: format!("Supported locale '{}' is listed twice", option.tag),
                });
            }
        }

        Ok(())
    }
}

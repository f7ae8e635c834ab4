//! Configuration settings for storyscout.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::ReadFile)?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default locations or use defaults.
    pub fn load() -> Result<Self> {
        let config_paths = [
            // Current directory
            PathBuf::from("storyscout.toml"),
            PathBuf::from("config.toml"),
            // User config directory
            dirs::config_dir()
                .map(|p| p.join("storyscout/config.toml"))
                .unwrap_or_default(),
        ];

        for path in &config_paths {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Config::default())
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.data.jersey_city_path.is_empty() {
            return Err(
                ConfigError::Invalid("data.jersey_city_path must not be empty".to_string()).into(),
            );
        }
        if self.data.hoboken_path.is_empty() {
            return Err(
                ConfigError::Invalid("data.hoboken_path must not be empty".to_string()).into(),
            );
        }
        if self.data.bookstore_path.is_empty() {
            return Err(
                ConfigError::Invalid("data.bookstore_path must not be empty".to_string()).into(),
            );
        }
        Ok(())
    }
}

/// Locations of the per-source snapshot data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Jersey City library events file.
    pub jersey_city_path: String,
    /// Hoboken library events file.
    pub hoboken_path: String,
    /// Cross-venue bookstore events file.
    pub bookstore_path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            jersey_city_path: "jersey_city_storytimes.json".to_string(),
            hoboken_path: "hoboken_storytimes.json".to_string(),
            bookstore_path: "bookstore_storytimes.json".to_string(),
        }
    }
}

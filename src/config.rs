//! Configuration management for Pitwall.
//!
//! Loads settings from a TOML file. Only the backing database path is
//! configurable; a missing config file falls back to defaults.

use crate::error::{PitwallError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Database path used when neither CLI nor config provide one.
pub const DEFAULT_DATABASE_PATH: &str = "output_database.db";

/// Main configuration structure for Pitwall.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Backing database settings.
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Backing database settings.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DatabaseConfig {
    /// Path to the Formula 1 results SQLite file.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pitwall")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| PitwallError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            PitwallError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }

    /// Returns the configured database path, if any.
    pub fn database_path(&self) -> Option<&Path> {
        self.database.path.as_deref()
    }
}

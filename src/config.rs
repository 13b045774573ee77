//! Configuration file parser for ~/.config/glance/config.toml.
//!
//! The config file is optional — a missing file yields `Config::default()`.
//! Unknown keys are silently ignored by serde so old configs keep working
//! across releases.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::feed::DEFAULT_FEED_URL;

/// Upper bound on config file size; anything larger is rejected rather
/// than read into memory.
const MAX_CONFIG_SIZE: u64 = 64 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file too large: {0} bytes")]
    TooLarge(u64),
}

/// Top-level application configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be
/// specified. Missing keys fall back to `Default::default()`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme variant name ("dark" or "light").
    pub theme: String,

    /// Feed endpoint to fetch posts from.
    pub feed_url: String,

    /// Minimum visible loading duration in milliseconds (anti-flicker).
    pub min_loading_ms: u64,

    /// Base backoff unit in milliseconds; retry `n` waits `2^n` units.
    pub backoff_unit_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            feed_url: DEFAULT_FEED_URL.to_string(),
            min_loading_ms: 500,
            backoff_unit_ms: 1000,
        }
    }
}

impl Config {
    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let metadata = std::fs::metadata(path)?;
        if metadata.len() > MAX_CONFIG_SIZE {
            return Err(ConfigError::TooLarge(metadata.len()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }
}

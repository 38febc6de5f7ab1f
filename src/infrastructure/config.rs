// src/infrastructure/config.rs
use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_API_BASE_URL, DEFAULT_FETCH_TIMEOUT_SECS,
    DEFAULT_USER_LIMIT, STORAGE_FILE_NAME,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML configuration for hrview
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct StorageConfig {
    /// Path of the local storage file. Empty means the platform data dir.
    #[serde(default)]
    pub path: String,
}

fn default_base_url() -> String { DEFAULT_API_BASE_URL.to_string() }
fn default_limit() -> u32 { DEFAULT_USER_LIMIT }
fn default_timeout_secs() -> u64 { DEFAULT_FETCH_TIMEOUT_SECS }

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            limit: default_limit(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl StorageConfig {
    /// Configured storage file, or `<data_dir>/hrview/local-storage.json`.
    pub fn resolve_path(&self) -> Result<PathBuf> {
        if !self.path.is_empty() {
            return Ok(PathBuf::from(&self.path));
        }
        let data_dir = dirs::data_dir().context("Could not find data directory")?;
        Ok(data_dir.join(APP_DIR_NAME).join(STORAGE_FILE_NAME))
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load from `path`, or from the default location. A missing file at the
    /// default location yields defaults; an explicit path must exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            debug!(?path, "Loading config from provided path");
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                debug!(?path, "Loading config from default location");
                Self::load(path)
            }
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}

//! Configuration management

use crate::error::{NotekeeperError, Result};
use crate::infrastructure::store::DEFAULT_STORE_SLOT;
use crate::logging::DEFAULT_LOG_LEVEL;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the workspace metadata directory
pub const WORKSPACE_DIR: &str = ".notekeeper";

fn default_store_slot() -> String {
    DEFAULT_STORE_SLOT.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_store_slot")]
    pub store_slot: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            store_slot: default_store_slot(),
            log_level: default_log_level(),
            created: Utc::now(),
        }
    }

    /// Load config from .notekeeper/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(WORKSPACE_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                NotekeeperError::NotWorkspace(path.to_path_buf())
            } else {
                NotekeeperError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| NotekeeperError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .notekeeper/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let workspace_dir = path.join(WORKSPACE_DIR);
        let config_path = workspace_dir.join("config.toml");

        if !workspace_dir.exists() {
            fs::create_dir(&workspace_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

//! Config management use case

use crate::application::theme::THEME_SLOT;
use crate::error::{NotekeeperError, Result};
use crate::infrastructure::slot::validate_key;
use crate::infrastructure::{Config, FileSystemWorkspace, Workspace};
use crate::logging::normalize_level;

/// Service for managing workspace configuration
pub struct ConfigService {
    workspace: FileSystemWorkspace,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(workspace: FileSystemWorkspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "store_slot" => Ok(config.store_slot),
            "log_level" => Ok(config.log_level),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(NotekeeperError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: store_slot, log_level, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "store_slot" => {
                let value = value.trim();
                validate_key(value)?;
                if value == "config.toml" || value == THEME_SLOT {
                    return Err(NotekeeperError::Config(format!(
                        "Invalid store slot: '{}'",
                        value
                    )));
                }
                config.store_slot = value.to_string();
            }
            "log_level" => {
                let level = normalize_level(value).map_err(NotekeeperError::Config)?;
                config.log_level = level.to_string();
            }
            "created" => {
                return Err(NotekeeperError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(NotekeeperError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: store_slot, log_level",
                    key
                )));
            }
        }

        self.workspace.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        crate::application::init::init(temp.path()).unwrap();
        ConfigService::new(FileSystemWorkspace::new(temp.path().to_path_buf()))
    }

    #[test]
    fn test_get_defaults() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert_eq!(service.get("store_slot").unwrap(), "notekeeperDB");
        assert_eq!(service.get("log_level").unwrap(), "warn");
        assert!(service.get("created").is_ok());
        assert!(service.get("nope").is_err());
    }

    #[test]
    fn test_set_log_level_normalizes() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("log_level", "DEBUG").unwrap();
        assert_eq!(service.get("log_level").unwrap(), "debug");
        assert!(service.set("log_level", "loud").is_err());
    }

    #[test]
    fn test_created_is_read_only() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        let err = service.set("created", "2025-01-01T00:00:00Z").unwrap_err();
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn test_store_slot_rejects_paths() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.set("store_slot", "../elsewhere").is_err());
        assert!(service.set("store_slot", "").is_err());
        assert!(service.set("store_slot", "theme").is_err());
        service.set("store_slot", "archive").unwrap();
        assert_eq!(service.list().unwrap().store_slot, "archive");
    }

    #[test]
    fn test_store_slot_rejects_directory_names() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.set("store_slot", ".").is_err());
        assert!(service.set("store_slot", "..").is_err());
        assert!(service.set("store_slot", " . ").is_err());
        assert_eq!(service.get("store_slot").unwrap(), "notekeeperDB");
    }
}

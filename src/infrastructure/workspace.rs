//! On-disk workspace layout

use crate::error::{NotekeeperError, Result};
use crate::infrastructure::config::WORKSPACE_DIR;
use crate::infrastructure::{Config, FileSlotStorage};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a workspace root
pub const ROOT_ENV: &str = "NOTEKEEPER_ROOT";

/// Abstract workspace operations
pub trait Workspace {
    /// Load configuration from .notekeeper/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .notekeeper/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .notekeeper directory exists
    fn is_initialized(&self) -> bool;

    /// Create .notekeeper directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of Workspace
#[derive(Debug, Clone)]
pub struct FileSystemWorkspace {
    pub root: PathBuf,
}

impl FileSystemWorkspace {
    /// Create a new workspace handle for the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemWorkspace { root }
    }

    /// Discover workspace root by walking up from current directory
    /// First checks NOTEKEEPER_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_workspace_dir(&path) {
                return Ok(FileSystemWorkspace::new(path));
            } else {
                return Err(NotekeeperError::Config(format!(
                    "{} is set to '{}' but no {} directory found. \
                    Run 'notekeeper init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    WORKSPACE_DIR,
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover workspace root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_workspace_dir(&current) {
                return Ok(FileSystemWorkspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(NotekeeperError::NotWorkspace(start.to_path_buf()));
                }
            }
        }
    }

    /// Slot storage backed by the .notekeeper directory
    pub fn slots(&self) -> FileSlotStorage {
        FileSlotStorage::new(self.root.join(WORKSPACE_DIR))
    }

    fn has_workspace_dir(path: &Path) -> bool {
        path.join(WORKSPACE_DIR).is_dir()
    }
}

impl Workspace for FileSystemWorkspace {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_workspace_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let workspace_dir = self.root.join(WORKSPACE_DIR);

        if workspace_dir.exists() {
            return Err(NotekeeperError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&workspace_dir)?;
        Ok(())
    }
}

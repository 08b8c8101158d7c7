//! Initialize workspace use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemWorkspace, Store, Workspace};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new workspace at the specified path.
pub fn init(path: &Path) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let workspace = FileSystemWorkspace::new(path.to_path_buf());
    workspace.initialize()?;

    let config = Config::new();
    workspace.save_config(&config)?;

    Store::new(workspace.slots(), config.store_slot.as_str()).initialize()?;

    info!(root = %path.display(), "initialized workspace");
    Ok(config)
}

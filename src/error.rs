//! Error types for notekeeper

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The kind of entity a lookup was searching for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Notebook,
    Note,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Notebook => write!(f, "Notebook"),
            EntityKind::Note => write!(f, "Note"),
        }
    }
}

/// Main error type for notekeeper
#[derive(Debug, Error)]
pub enum NotekeeperError {
    #[error("Not a notekeeper directory: {0}")]
    NotWorkspace(PathBuf),

    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    #[error("Corrupt store: {0}")]
    CorruptState(String),

    #[error("Id collision: {0}")]
    Collision(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl NotekeeperError {
    pub fn notebook_not_found(id: &str) -> Self {
        NotekeeperError::NotFound {
            kind: EntityKind::Notebook,
            id: id.to_string(),
        }
    }

    pub fn note_not_found(id: &str) -> Self {
        NotekeeperError::NotFound {
            kind: EntityKind::Note,
            id: id.to_string(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NotekeeperError::NotWorkspace(_) => 2,
            NotekeeperError::NotFound { .. } => 3,
            NotekeeperError::CorruptState(_) => 4,
            NotekeeperError::Collision(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            NotekeeperError::NotWorkspace(path) => {
                format!(
                    "Not a notekeeper directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'notekeeper init' in this directory to create a new workspace\n\
                    • Navigate to an existing notekeeper directory\n\
                    • Set NOTEKEEPER_ROOT environment variable to your workspace path",
                    path.display()
                )
            }
            NotekeeperError::NotFound { kind, id } => match kind {
                EntityKind::Notebook => format!(
                    "Notebook not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'notekeeper notebook list' to see notebook ids",
                    id
                ),
                EntityKind::Note => format!(
                    "Note not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'notekeeper note list <NOTEBOOK_ID>' to see note ids\n\
                    • Check that the note belongs to the notebook you named",
                    id
                ),
            },
            NotekeeperError::CorruptState(msg) => {
                format!(
                    "Corrupt store: {}\n\n\
                    The store slot under .notekeeper/ could not be read.\n\
                    Restore it from a backup or move it aside to start empty.",
                    msg
                )
            }
            NotekeeperError::Config(msg) => {
                if msg.contains("log level") {
                    format!(
                        "{}\n\n\
                        Valid levels: trace, debug, info, warn, error\n\
                        Example: notekeeper config log_level debug",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using NotekeeperError
pub type Result<T> = std::result::Result<T, NotekeeperError>;

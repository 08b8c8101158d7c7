//! Infrastructure layer - Persistent slots, store and workspace layout

pub mod config;
pub mod slot;
pub mod store;
pub mod workspace;

pub use config::Config;
pub use slot::{FileSlotStorage, MemorySlotStorage, SlotStorage};
pub use store::{Store, DEFAULT_STORE_SLOT};
pub use workspace::{FileSystemWorkspace, Workspace};

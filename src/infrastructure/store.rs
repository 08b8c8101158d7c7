//! Store persistence against a single named slot

use crate::domain::StoreData;
use crate::error::{NotekeeperError, Result};
use crate::infrastructure::SlotStorage;
use tracing::{debug, info, warn};

/// Default slot holding the serialized store
pub const DEFAULT_STORE_SLOT: &str = "notekeeperDB";

/// Reads and writes the whole store as one JSON value
#[derive(Debug, Clone)]
pub struct Store<S: SlotStorage> {
    slots: S,
    key: String,
}

impl<S: SlotStorage> Store<S> {
    pub fn new(slots: S, key: impl Into<String>) -> Self {
        Store {
            slots,
            key: key.into(),
        }
    }

    /// Write an empty store unless the slot already holds a value.
    /// Returns true when the slot was created.
    pub fn initialize(&self) -> Result<bool> {
        if self.slots.get(&self.key)?.is_some() {
            debug!(slot = %self.key, "store slot already present");
            return Ok(false);
        }

        self.save(&StoreData::new())?;
        info!(slot = %self.key, "created empty store");
        Ok(true)
    }

    /// Read and parse the slot. A missing slot reads as an empty store.
    pub fn load(&self) -> Result<StoreData> {
        let Some(raw) = self.slots.get(&self.key)? else {
            warn!(slot = %self.key, "store slot missing, treating as empty");
            return Ok(StoreData::new());
        };

        let data: StoreData = serde_json::from_str(&raw).map_err(|e| {
            NotekeeperError::CorruptState(format!("slot '{}' does not parse: {}", self.key, e))
        })?;

        data.check_back_references().map_err(|detail| {
            NotekeeperError::CorruptState(format!("slot '{}': {}", self.key, detail))
        })?;

        debug!(slot = %self.key, notebooks = data.notebooks.len(), "loaded store");
        Ok(data)
    }

    /// Serialize and fully overwrite the slot
    pub fn save(&self, data: &StoreData) -> Result<()> {
        let raw = serde_json::to_string(data)?;
        self.slots.set(&self.key, &raw)?;
        debug!(slot = %self.key, bytes = raw.len(), "saved store");
        Ok(())
    }
}

//! In-memory key-value store for tests and ephemeral runs.

use super::{KeyValueStore, StoreError};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::instrument;

/// Key-value store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates a new empty store.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::new("Store mutex poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::new("Store mutex poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

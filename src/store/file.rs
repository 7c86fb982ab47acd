//! JSON-file-backed key-value store.

use super::{KeyValueStore, StoreError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

/// Key-value store mirrored to a JSON file.
///
/// The file holds a flat string-to-string map. Entries live in memory
/// behind a mutex; every write flushes the whole map back to disk.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Opens a store at the given path.
    ///
    /// A missing file starts the store empty. An unreadable or
    /// malformed file also starts it empty, with a warning: bad
    /// storage must never prevent startup.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match Self::read_entries(&path) {
            Ok(entries) => {
                debug!(count = entries.len(), "Loaded store entries");
                entries
            }
            Err(err) => {
                warn!(%err, "Failed to load store file, starting empty");
                HashMap::new()
            }
        };

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(path: &Path) -> Result<HashMap<String, String>, StoreError> {
        if !path.exists() {
            return Ok(HashMap::new());
        }
        let raw = std::fs::read_to_string(path)?;
        let entries = serde_json::from_str(&raw)?;
        Ok(entries)
    }

    fn flush(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    #[instrument(skip(self))]
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::new("Store mutex poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    #[instrument(skip(self, value))]
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::new("Store mutex poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }
}

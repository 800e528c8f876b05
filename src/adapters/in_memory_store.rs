//! In-memory policy store for testing.
//!
//! Provides a pure in-memory implementation of PolicyStore, enabling fast
//! tests without any file system I/O.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex},
};

use crate::{Result, error::Error, learning::PolicyTable, ports::PolicyStore};

/// In-memory store for testing.
///
/// Keys are paths, values are the serialized table bytes, so the adapter
/// exercises the same encode/decode path as the on-disk store. Loading from a
/// path that was never saved yields an empty table, matching the cold-start
/// contract of the port.
///
/// # Thread Safety
///
/// Clones share the same underlying storage.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    storage: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Number of tables currently stored.
    pub fn count(&self) -> usize {
        self.storage.lock().unwrap().len()
    }

    /// Remove all stored tables.
    pub fn clear(&self) {
        self.storage.lock().unwrap().clear();
    }

    /// Check whether a table was saved at the given path.
    pub fn contains(&self, path: &Path) -> bool {
        let key = path.to_string_lossy().to_string();
        self.storage.lock().unwrap().contains_key(&key)
    }
}

impl PolicyStore for InMemoryStore {
    fn load(&self, path: &Path) -> Result<PolicyTable> {
        let key = path.to_string_lossy().to_string();
        let storage = self.storage.lock().unwrap();

        let Some(bytes) = storage.get(&key) else {
            return Ok(PolicyTable::new());
        };

        rmp_serde::from_slice(bytes).map_err(|e| Error::CorruptStore {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn save(&self, table: &PolicyTable, path: &Path) -> Result<()> {
        let key = path.to_string_lossy().to_string();

        let bytes = rmp_serde::to_vec(table).map_err(|e| Error::Serialization {
            operation: "serialize policy table for in-memory storage".to_string(),
            message: e.to_string(),
        })?;

        self.storage.lock().unwrap().insert(key, bytes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StateKey;

    fn sample_table() -> PolicyTable {
        let mut table = PolicyTable::new();
        table.set(StateKey::parse("....X....").unwrap(), 0.3);
        table
    }

    #[test]
    fn test_save_and_load() {
        let store = InMemoryStore::new();
        let path = Path::new("test_policy");

        assert_eq!(store.count(), 0);
        assert!(!store.contains(path));

        store.save(&sample_table(), path).unwrap();
        assert_eq!(store.count(), 1);
        assert!(store.contains(path));

        let loaded = store.load(path).unwrap();
        assert_eq!(loaded, sample_table());
    }

    #[test]
    fn test_load_unsaved_path_yields_empty_table() {
        let store = InMemoryStore::new();
        let loaded = store.load(Path::new("nonexistent")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_clear_removes_all() {
        let store = InMemoryStore::new();
        store.save(&sample_table(), Path::new("a")).unwrap();
        store.save(&sample_table(), Path::new("b")).unwrap();
        assert_eq!(store.count(), 2);

        store.clear();
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_clone_shares_storage() {
        let first = InMemoryStore::new();
        let second = first.clone();

        first.save(&sample_table(), Path::new("shared")).unwrap();

        let loaded = second.load(Path::new("shared")).unwrap();
        assert_eq!(loaded, sample_table());
        assert_eq!(second.count(), 1);
    }
}

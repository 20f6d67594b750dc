//! Local key-value persistence.
//!
//! Everything the application remembers between runs is a plain string
//! under a fixed key:
//! - [`AUTH_KEY`] holds the authentication flag (`"true"` or absent)
//! - [`LAST_MESSAGE_DATE_KEY`] holds the calendar day of the daily message
//! - [`TODAY_MESSAGE_INDEX_KEY`] holds that day's index into the daily pool
//!
//! [`Storage`] persists to a redb file and survives restarts until cleared.
//! [`MemoryStore`] keeps the same contract in memory for tests.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};

use crate::error::ComfortResult;

/// Authentication flag key.
pub const AUTH_KEY: &str = "dailyComfortAuth";
/// Calendar day (`YYYY-MM-DD`) the daily message was chosen for.
pub const LAST_MESSAGE_DATE_KEY: &str = "lastMessageDate";
/// Decimal index into the daily pool for [`LAST_MESSAGE_DATE_KEY`].
pub const TODAY_MESSAGE_INDEX_KEY: &str = "todayMessageIndex";

const KV_TABLE: TableDefinition<&str, &str> = TableDefinition::new("kv");

/// String-to-string store that outlives a single page session.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> ComfortResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> ComfortResult<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> ComfortResult<()>;

    /// Remove every key.
    fn clear(&self) -> ComfortResult<()>;
}

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// Creates the parent directory and the `kv` table if they don't exist.
    pub fn new(path: impl AsRef<Path>) -> ComfortResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(KV_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!("Opened key-value store at {:?}", path);

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// List all stored keys, sorted.
    pub fn keys(&self) -> ComfortResult<Vec<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(KV_TABLE)?;

        let mut keys = Vec::new();
        for entry in table.iter()? {
            let (key, _) = entry?;
            keys.push(key.value().to_string());
        }
        Ok(keys)
    }
}

impl KeyValueStore for Storage {
    fn get(&self, key: &str) -> ComfortResult<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(KV_TABLE)?;

        let value = table.get(key)?.map(|v| v.value().to_string());
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> ComfortResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(KV_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> ComfortResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(KV_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn clear(&self) -> ComfortResult<()> {
        let keys = self.keys()?;

        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(KV_TABLE)?;
            for key in &keys {
                table.remove(key.as_str())?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// In-memory store with the same contract as [`Storage`].
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> ComfortResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ComfortResult<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ComfortResult<()> {
        self.entries.write().remove(key);
        Ok(())
    }

    fn clear(&self) -> ComfortResult<()> {
        self.entries.write().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.redb");
        let storage = Storage::new(&db_path).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_set_and_get() {
        let (storage, _temp) = create_test_storage();

        assert!(storage.get(AUTH_KEY).unwrap().is_none());
        storage.set(AUTH_KEY, "true").unwrap();
        assert_eq!(storage.get(AUTH_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_set_overwrites() {
        let (storage, _temp) = create_test_storage();

        storage.set(TODAY_MESSAGE_INDEX_KEY, "1").unwrap();
        storage.set(TODAY_MESSAGE_INDEX_KEY, "3").unwrap();
        assert_eq!(
            storage.get(TODAY_MESSAGE_INDEX_KEY).unwrap().as_deref(),
            Some("3")
        );
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let (storage, _temp) = create_test_storage();
        storage.remove(AUTH_KEY).unwrap();
        assert!(storage.get(AUTH_KEY).unwrap().is_none());
    }

    #[test]
    fn test_clear_removes_everything() {
        let (storage, _temp) = create_test_storage();

        storage.set(AUTH_KEY, "true").unwrap();
        storage.set(LAST_MESSAGE_DATE_KEY, "2024-05-01").unwrap();
        storage.set(TODAY_MESSAGE_INDEX_KEY, "2").unwrap();
        assert_eq!(storage.keys().unwrap().len(), 3);

        storage.clear().unwrap();
        assert!(storage.keys().unwrap().is_empty());
    }

    #[test]
    fn test_values_persist_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.redb");

        {
            let storage = Storage::new(&db_path).unwrap();
            storage.set(LAST_MESSAGE_DATE_KEY, "2024-05-01").unwrap();
        }

        {
            let storage = Storage::new(&db_path).unwrap();
            assert_eq!(
                storage.get(LAST_MESSAGE_DATE_KEY).unwrap().as_deref(),
                Some("2024-05-01")
            );
        }
    }

    #[test]
    fn test_memory_store_contract() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.set(AUTH_KEY, "true").unwrap();
        store.set(TODAY_MESSAGE_INDEX_KEY, "0").unwrap();
        assert_eq!(store.len(), 2);

        store.remove(AUTH_KEY).unwrap();
        assert!(store.get(AUTH_KEY).unwrap().is_none());

        store.clear().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let handle = store.clone();

        handle.set(AUTH_KEY, "true").unwrap();
        assert_eq!(store.get(AUTH_KEY).unwrap().as_deref(), Some("true"));
    }
}

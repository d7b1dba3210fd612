// In memory implementation of the KeyValueStore port.
//
// Purpose
// - Support store tests and local runs without touching the disk.

use crate::shared::infrastructure::key_value_store::{KeyValueStore, StorageError};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryKeyValueStore {
    inner: RwLock<HashMap<String, String>>,
    is_offline: AtomicBool,
    offline_keys: Mutex<HashSet<String>>,
    writes: AtomicUsize,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    /// Takes a single key offline, or back online. Other keys keep working.
    pub fn toggle_offline_key(&self, key: &str) {
        let mut keys = self
            .offline_keys
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if !keys.remove(key) {
            keys.insert(key.to_string());
        }
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn ensure_online(&self, key: &str) -> Result<(), StorageError> {
        let key_offline = self
            .offline_keys
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains(key);
        if key_offline || self.is_offline.load(Ordering::SeqCst) {
            return Err(StorageError::Offline);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.ensure_online(key)?;
        Ok(self.inner.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ensure_online(key)?;
        self.inner
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_key_value_store_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_set_and_get_a_value() {
        let store = InMemoryKeyValueStore::new();
        store.set("employees", "[]").await.expect("set failed");
        assert_eq!(store.get("employees").await.unwrap(), Some("[]".to_string()));
        assert_eq!(store.write_count(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_none_for_a_missing_key() {
        let store = InMemoryKeyValueStore::new();
        assert_eq!(store.get("timeEntries").await.unwrap(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_offline() {
        let store = InMemoryKeyValueStore::new();
        store.toggle_offline();
        assert!(matches!(
            store.set("employees", "[]").await,
            Err(StorageError::Offline)
        ));
        assert!(matches!(store.get("employees").await, Err(StorageError::Offline)));
        assert_eq!(store.write_count(), 0);

        store.toggle_offline();
        assert!(store.set("employees", "[]").await.is_ok());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_only_for_an_offline_key() {
        let store = InMemoryKeyValueStore::new();
        store.toggle_offline_key("timeEntries");
        assert!(matches!(
            store.set("timeEntries", "[]").await,
            Err(StorageError::Offline)
        ));
        store.set("employees", "[]").await.expect("other keys stay online");

        store.toggle_offline_key("timeEntries");
        store.set("timeEntries", "[]").await.expect("key back online");
        assert_eq!(store.write_count(), 2);
    }
}

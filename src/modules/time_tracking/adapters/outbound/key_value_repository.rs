// TimeTrackingRepository over any KeyValueStore.
//
// Responsibilities
// - Serialize the roster under "employees" and the ledger under "timeEntries" as JSON arrays.
// - Treat a missing key as an empty collection.

use crate::modules::time_tracking::core::employee::Employee;
use crate::modules::time_tracking::core::ports::TimeTrackingRepository;
use crate::modules::time_tracking::core::time_entry::TimeEntry;
use crate::shared::infrastructure::key_value_store::{KeyValueStore, StorageError};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

pub const EMPLOYEES_KEY: &str = "employees";
pub const TIME_ENTRIES_KEY: &str = "timeEntries";

pub struct KeyValueRepository<TStore>
where
    TStore: KeyValueStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> KeyValueRepository<TStore>
where
    TStore: KeyValueStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    async fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StorageError> {
        match self.store.get(key).await? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
                key: key.to_string(),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    async fn save<T: Serialize>(&self, key: &str, rows: &[T]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(rows).map_err(|source| StorageError::Corrupt {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, &raw).await
    }
}

#[async_trait]
impl<TStore> TimeTrackingRepository for KeyValueRepository<TStore>
where
    TStore: KeyValueStore + 'static,
{
    async fn load_roster(&self) -> Result<Vec<Employee>, StorageError> {
        self.load(EMPLOYEES_KEY).await
    }

    async fn load_ledger(&self) -> Result<Vec<TimeEntry>, StorageError> {
        self.load(TIME_ENTRIES_KEY).await
    }

    async fn save_roster(&self, roster: &[Employee]) -> Result<(), StorageError> {
        self.save(EMPLOYEES_KEY, roster).await
    }

    async fn save_ledger(&self, ledger: &[TimeEntry]) -> Result<(), StorageError> {
        self.save(TIME_ENTRIES_KEY, ledger).await
    }
}

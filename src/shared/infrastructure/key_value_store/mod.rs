// Key-value storage port. The durable boundary of the system: string values under string keys.
//
// Purpose
// - Let the time tracking repository persist its collections without knowing where they land.
//
// Testing guidance
// - Use the in memory implementation, toggle it offline to exercise failure paths.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage offline")]
    Offline,

    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt value under key {key}: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub mod file_system;
pub mod in_memory;

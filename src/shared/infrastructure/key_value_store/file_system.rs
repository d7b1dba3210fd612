// File system implementation of the KeyValueStore port.
//
// Responsibilities
// - Keep one `<key>.json` file per key under a data directory.
// - Replace files through a temporary sibling and a rename so a crash never leaves half a value.

use crate::shared::infrastructure::key_value_store::{KeyValueStore, StorageError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone)]
pub struct FileSystemKeyValueStore {
    root: PathBuf,
}

impl FileSystemKeyValueStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileSystemKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).await?;
        let target = self.path_for(key);
        let staging = self.root.join(format!(".{key}.json.tmp"));
        fs::write(&staging, value).await?;
        fs::rename(&staging, &target).await?;
        tracing::debug!(key, path = %target.display(), bytes = value.len(), "value written");
        Ok(())
    }
}

#[cfg(test)]
mod file_system_key_value_store_tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[tokio::test]
    async fn it_should_return_none_before_the_first_write() {
        let dir = TempDir::new().unwrap();
        let store = FileSystemKeyValueStore::new(dir.path().join("data"));
        assert_eq!(store.get("employees").await.unwrap(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_create_the_directory_and_overwrite_values() {
        let dir = TempDir::new().unwrap();
        let store = FileSystemKeyValueStore::new(dir.path().join("data"));
        store.set("timeEntries", "[1]").await.expect("first set failed");
        store.set("timeEntries", "[1,2]").await.expect("second set failed");

        assert_eq!(store.get("timeEntries").await.unwrap(), Some("[1,2]".to_string()));
        assert!(store.root().join("timeEntries.json").exists());
        assert!(!store.root().join(".timeEntries.json.tmp").exists());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_keys_independent() {
        let dir = TempDir::new().unwrap();
        let store = FileSystemKeyValueStore::new(dir.path());
        store.set("employees", "[\"e\"]").await.unwrap();
        store.set("timeEntries", "[\"t\"]").await.unwrap();
        assert_eq!(store.get("employees").await.unwrap(), Some("[\"e\"]".to_string()));
        assert_eq!(store.get("timeEntries").await.unwrap(), Some("[\"t\"]".to_string()));
    }
}

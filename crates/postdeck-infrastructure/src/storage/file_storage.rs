//! JSON file backed key/value storage.
//!
//! The whole map is rewritten on every change through a temporary file and
//! an atomic rename, so a crash never leaves a half-written token file.

use async_trait::async_trait;
use postdeck_core::storage::DurableStorage;
use postdeck_core::{DashboardError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::paths::PostdeckPaths;

type Entries = BTreeMap<String, String>;

/// Durable storage persisted as a flat JSON object.
///
/// Responsibilities:
/// - Read and write `local_storage.json`
/// - Serialize concurrent writers within the process
///
/// Does NOT:
/// - Encrypt values
/// - Coordinate with other processes
pub struct FileStorage {
    path: PathBuf,
    /// Held for the whole read-modify-write cycle.
    write_lock: Mutex<()>,
}

impl FileStorage {
    /// Creates storage at the default location (`~/.config/postdeck/local_storage.json`).
    pub fn new() -> Result<Self> {
        let path = PostdeckPaths::storage_file().map_err(|e| DashboardError::config(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Creates storage at a custom path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Entries> {
        if !fs::try_exists(&self.path).await? {
            return Ok(Entries::new());
        }

        let content = fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&content)
            .map_err(|e| DashboardError::storage(format!("{}: {}", self.path.display(), e)))
    }

    async fn save(&self, entries: &Entries) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(entries)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = fs::File::create(&tmp_path).await?;
        tmp_file.write_all(json.as_bytes()).await?;
        tmp_file.sync_all().await?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }

    async fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Entries),
    {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        f(&mut entries);
        self.save(&entries).await
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| DashboardError::storage("storage path has no file name"))?;
        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(self.path.with_file_name(tmp_name))
    }
}

#[async_trait]
impl DurableStorage for FileStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let entries = self.load().await?;
        Ok(entries.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
        .await
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        self.update(|entries| {
            entries.remove(key);
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_get_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::with_path(temp_dir.path().join("local_storage.json"));

        assert_eq!(storage.get_item("auth_token").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("local_storage.json");

        let storage = FileStorage::with_path(path.clone());
        storage.set_item("auth_token", "abc").await.unwrap();
        storage.set_item("theme", "dark").await.unwrap();

        let reopened = FileStorage::with_path(path);
        assert_eq!(
            reopened.get_item("auth_token").await.unwrap(),
            Some("abc".to_string())
        );
        assert_eq!(reopened.get_item("theme").await.unwrap(), Some("dark".to_string()));
    }

    #[tokio::test]
    async fn test_remove_keeps_other_keys() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::with_path(temp_dir.path().join("local_storage.json"));

        storage.set_item("auth_token", "abc").await.unwrap();
        storage.set_item("theme", "dark").await.unwrap();
        storage.remove_item("auth_token").await.unwrap();
        storage.remove_item("never_set").await.unwrap();

        assert_eq!(storage.get_item("auth_token").await.unwrap(), None);
        assert_eq!(storage.get_item("theme").await.unwrap(), Some("dark".to_string()));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("local_storage.json");
        std::fs::write(&path, "{ not json").unwrap();

        let storage = FileStorage::with_path(path);
        let err = storage.get_item("auth_token").await.unwrap_err();
        assert!(matches!(err, DashboardError::Storage(_)));
    }
}

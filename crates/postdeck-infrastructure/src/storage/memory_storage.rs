//! In-process storage for tests and ephemeral runs.

use async_trait::async_trait;
use postdeck_core::Result;
use postdeck_core::storage::DurableStorage;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Durable storage that lasts only as long as the value itself.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated storage, e.g. a token left over from an earlier run.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl DurableStorage for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip() {
        let storage = MemoryStorage::with_entries([("auth_token", "t1")]);
        assert_eq!(storage.get_item("auth_token").await.unwrap(), Some("t1".into()));

        storage.remove_item("auth_token").await.unwrap();
        assert_eq!(storage.get_item("auth_token").await.unwrap(), None);
    }
}

//! Durable key/value storage trait.
//!
//! The dashboard persists exactly one value across runs (the bearer token),
//! but the interface is a plain string map so other keys stay possible.

use crate::error::Result;
use async_trait::async_trait;

/// Persistent string storage that survives process restarts.
#[async_trait]
pub trait DurableStorage: Send + Sync {
    /// Returns the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))`: Key present
    /// - `Ok(None)`: Key absent
    /// - `Err(_)`: Storage could not be read
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    async fn remove_item(&self, key: &str) -> Result<()>;
}

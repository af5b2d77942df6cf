//! Composition root.
//!
//! Builds the remote client, the durable storage and the three stores once
//! per process, all sharing the same client so the session's bearer token
//! reaches every store's requests.

use crate::store::{SessionStore, SocialMediaStore, TwitterStore};
use postdeck_core::Result;
use postdeck_core::config::DashboardConfig;
use postdeck_core::remote::RemoteService;
use postdeck_core::storage::DurableStorage;
use postdeck_infrastructure::{FileStorage, HttpRemoteService};
use std::sync::Arc;

pub struct AppContext {
    pub config: DashboardConfig,
    pub remote: Arc<dyn RemoteService>,
    pub storage: Arc<dyn DurableStorage>,
    pub session: SessionStore,
    pub social_media: SocialMediaStore,
    pub twitter: TwitterStore,
}

impl AppContext {
    /// Wires the stores around an existing client and storage.
    pub fn new(
        config: DashboardConfig,
        remote: Arc<dyn RemoteService>,
        storage: Arc<dyn DurableStorage>,
    ) -> Self {
        let delays = config.delays;
        Self {
            session: SessionStore::new(remote.clone(), storage.clone(), delays),
            social_media: SocialMediaStore::new(remote.clone(), delays),
            twitter: TwitterStore::new(remote.clone(), delays),
            config,
            remote,
            storage,
        }
    }

    /// Builds the production context: HTTP client, file storage, and any
    /// session persisted by a previous run.
    pub async fn bootstrap(config: DashboardConfig) -> Result<Self> {
        let remote: Arc<dyn RemoteService> = Arc::new(HttpRemoteService::from_settings(&config.api));
        let storage: Arc<dyn DurableStorage> = match &config.storage.path {
            Some(path) => Arc::new(FileStorage::with_path(path.clone())),
            None => Arc::new(FileStorage::new()?),
        };

        tracing::info!(base_url = %config.api.resolved_base_url(), "[Bootstrap] Remote service configured");

        let context = Self::new(config, remote, storage);
        if context.session.restore().await {
            tracing::info!("[Bootstrap] Resumed previous session");
        }
        Ok(context)
    }
}

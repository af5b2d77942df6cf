//! Dashboard configuration model.
//!
//! Loading (file + environment) lives in the infrastructure crate; this is
//! only the shape and its defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api: ApiSettings,
    pub storage: StorageSettings,
    pub delays: SimulatedDelays,
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            storage: StorageSettings::default(),
            delays: SimulatedDelays::default(),
            log_level: "info".to_string(),
        }
    }
}

/// Where the backend lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL or base path. A path (e.g. `/api`) is resolved against `origin`.
    pub base_url: String,
    pub origin: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            origin: DEFAULT_API_ORIGIN.to_string(),
        }
    }
}

impl ApiSettings {
    /// The absolute base URL with no trailing slash.
    pub fn resolved_base_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if base.starts_with("http://") || base.starts_with("https://") {
            base.to_string()
        } else {
            let origin = self.origin.trim_end_matches('/');
            let path = base.trim_start_matches('/');
            if path.is_empty() {
                origin.to_string()
            } else {
                format!("{origin}/{path}")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Overrides the durable storage file location.
    pub path: Option<PathBuf>,
}

/// Fixed delays used by simulated and fallback paths, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatedDelays {
    pub login_ms: u64,
    pub logout_ms: u64,
    pub user_info_ms: u64,
    pub fetch_ms: u64,
    pub create_ms: u64,
    pub publish_fallback_ms: u64,
}

impl Default for SimulatedDelays {
    fn default() -> Self {
        Self {
            login_ms: 1000,
            logout_ms: 500,
            user_info_ms: 800,
            fetch_ms: 800,
            create_ms: 1000,
            publish_fallback_ms: 2000,
        }
    }
}

impl SimulatedDelays {
    /// No waiting at all. Used by tests and scripted runs.
    pub fn none() -> Self {
        Self {
            login_ms: 0,
            logout_ms: 0,
            user_info_ms: 0,
            fetch_ms: 0,
            create_ms: 0,
            publish_fallback_ms: 0,
        }
    }

    pub fn login(&self) -> Duration {
        Duration::from_millis(self.login_ms)
    }

    pub fn logout(&self) -> Duration {
        Duration::from_millis(self.logout_ms)
    }

    pub fn user_info(&self) -> Duration {
        Duration::from_millis(self.user_info_ms)
    }

    pub fn fetch(&self) -> Duration {
        Duration::from_millis(self.fetch_ms)
    }

    pub fn create(&self) -> Duration {
        Duration::from_millis(self.create_ms)
    }

    pub fn publish_fallback(&self) -> Duration {
        Duration::from_millis(self.publish_fallback_ms)
    }
}

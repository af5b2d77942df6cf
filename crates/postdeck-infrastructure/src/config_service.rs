//! Dashboard configuration loading.
//!
//! Priority: environment variables > config.toml > built-in defaults.

use crate::paths::PostdeckPaths;
use postdeck_core::config::DashboardConfig;
use postdeck_core::{DashboardError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_API_BASE_URL: &str = "POSTDECK_API_BASE_URL";
pub const ENV_API_ORIGIN: &str = "POSTDECK_API_ORIGIN";
pub const ENV_STORAGE_PATH: &str = "POSTDECK_STORAGE_PATH";
pub const ENV_LOG_LEVEL: &str = "POSTDECK_LOG_LEVEL";

/// Loads [`DashboardConfig`] from config.toml and the environment.
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Uses the default location (`~/.config/postdeck/config.toml`).
    pub fn new() -> Result<Self> {
        let path = PostdeckPaths::config_file().map_err(|e| DashboardError::config(e.to_string()))?;
        Ok(Self { path })
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the file (missing file means defaults) and applies process env overrides.
    pub fn load(&self) -> Result<DashboardConfig> {
        let env: HashMap<String, String> = std::env::vars().collect();
        self.load_with_env(&env)
    }

    /// Same as [`load`](Self::load) with an explicit environment.
    pub fn load_with_env(&self, env: &HashMap<String, String>) -> Result<DashboardConfig> {
        let mut config = self.load_file()?;
        apply_env_overrides(&mut config, env);
        Ok(config)
    }

    fn load_file(&self) -> Result<DashboardConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No config file, using defaults");
            return Ok(DashboardConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(DashboardConfig::default());
        }

        Ok(toml::from_str(&content)?)
    }
}

fn apply_env_overrides(config: &mut DashboardConfig, env: &HashMap<String, String>) {
    let non_empty = |key: &str| env.get(key).filter(|v| !v.trim().is_empty()).cloned();

    if let Some(base_url) = non_empty(ENV_API_BASE_URL) {
        config.api.base_url = base_url;
    }
    if let Some(origin) = non_empty(ENV_API_ORIGIN) {
        config.api.origin = origin;
    }
    if let Some(path) = non_empty(ENV_STORAGE_PATH) {
        config.storage.path = Some(PathBuf::from(path));
    }
    if let Some(level) = non_empty(ENV_LOG_LEVEL) {
        config.log_level = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        let config = service.load_with_env(&HashMap::new()).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_env_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            log_level = "warn"

            [api]
            base_url = "/backend"
            "#,
        )
        .unwrap();

        let env = HashMap::from([
            (ENV_API_BASE_URL.to_string(), "https://api.example.com".to_string()),
            (ENV_LOG_LEVEL.to_string(), "  ".to_string()),
        ]);
        let config = ConfigService::with_path(path).load_with_env(&env).unwrap();

        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_invalid_toml_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[api\nbase_url =").unwrap();

        let err = ConfigService::with_path(path)
            .load_with_env(&HashMap::new())
            .unwrap_err();
        assert!(matches!(err, DashboardError::Serialization { .. }));
    }
}

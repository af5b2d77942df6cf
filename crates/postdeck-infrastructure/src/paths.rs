//! Path management for postdeck configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/postdeck/          # Config directory (platform config dir)
//! ├── config.toml              # Dashboard configuration
//! └── local_storage.json       # Durable key/value storage (bearer token)
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find configuration directory"),
        }
    }
}

impl std::error::Error for PathError {}

const APP_DIR: &str = "postdeck";

pub struct PostdeckPaths;

impl PostdeckPaths {
    /// Returns the postdeck configuration directory (e.g. `~/.config/postdeck/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to config.toml.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the durable storage file.
    ///
    /// # Security Note
    ///
    /// This file holds the bearer token in plaintext.
    pub fn storage_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("local_storage.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_live_under_config_dir() {
        // Headless CI machines may lack a config dir entirely
        let Ok(dir) = PostdeckPaths::config_dir() else {
            return;
        };
        assert!(dir.ends_with(APP_DIR));
        assert_eq!(PostdeckPaths::config_file().unwrap(), dir.join("config.toml"));
        assert_eq!(
            PostdeckPaths::storage_file().unwrap(),
            dir.join("local_storage.json")
        );
    }
}

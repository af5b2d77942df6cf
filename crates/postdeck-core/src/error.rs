//! Error types for the Postdeck dashboard.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire dashboard.
///
/// Remote failures arrive as one of `Transport`, `Status` or `Decode`. The
/// stores collapse all three into their error slot, so callers rarely need to
/// tell them apart; tests and logs do.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DashboardError {
    /// The remote service could not be reached
    #[error("Transport error: {0}")]
    Transport(String),

    /// The remote service answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected JSON shape
    #[error("Malformed response: {0}")]
    Decode(String),

    /// Durable storage (token persistence) failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DashboardError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a Status error
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Creates a Decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a transport (availability) failure
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this is a non-success status
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    /// Check if this is a malformed-response failure
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Check if this error came from talking to the remote service.
    ///
    /// Returns true for `Transport`, `Status` and `Decode`, the three kinds
    /// the stores answer with fallback data.
    pub fn is_remote_failure(&self) -> bool {
        self.is_transport() || self.is_status() || self.is_decode()
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for DashboardError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, DashboardError>`.
pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_failure_kinds() {
        assert!(DashboardError::transport("connection refused").is_remote_failure());
        assert!(DashboardError::status(503, "unavailable").is_remote_failure());
        assert!(DashboardError::decode("expected array").is_remote_failure());
        assert!(!DashboardError::storage("disk full").is_remote_failure());
        assert!(!DashboardError::config("bad url").is_remote_failure());
    }

    #[test]
    fn test_status_display() {
        let err = DashboardError::status(404, "Failed to fetch accounts");
        assert_eq!(err.to_string(), "HTTP 404: Failed to fetch accounts");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let err: DashboardError = parse_err.into();
        match err {
            DashboardError::Serialization { format, .. } => assert_eq!(format, "JSON"),
            other => panic!("Expected serialization error, got {other:?}"),
        }
    }
}

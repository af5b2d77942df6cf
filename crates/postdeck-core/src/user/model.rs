//! User identity model.

use serde::{Deserialize, Serialize};

/// Durable storage key holding the bearer token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// The authenticated operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

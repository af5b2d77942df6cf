//! SocialAccount domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Social networks an account can belong to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    Twitter,
    Facebook,
    Instagram,
    Linkedin,
    Tiktok,
}

/// A social media account managed from the dashboard.
///
/// Accounts are never deleted locally; disconnecting only clears
/// `is_connected`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialAccount {
    pub id: String,
    pub platform: Platform,
    pub username: String,
    pub display_name: String,
    pub profile_image: String,
    pub is_connected: bool,
    pub follower_count: u64,
    pub following_count: u64,
    pub posts_count: u64,
    pub last_synced_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// All accounts of one platform, in collection order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformGroup {
    pub platform: Platform,
    pub accounts: Vec<SocialAccount>,
}

/// Returns the accounts whose `is_connected` flag is set.
pub fn connected_accounts(accounts: &[SocialAccount]) -> Vec<SocialAccount> {
    accounts.iter().filter(|a| a.is_connected).cloned().collect()
}

/// Partitions accounts by platform.
///
/// Groups appear in the order their platform is first seen, and each group
/// keeps the collection order of its accounts.
pub fn group_by_platform(accounts: &[SocialAccount]) -> Vec<PlatformGroup> {
    let mut groups: Vec<PlatformGroup> = Vec::new();
    for account in accounts {
        match groups.iter_mut().find(|g| g.platform == account.platform) {
            Some(group) => group.accounts.push(account.clone()),
            None => groups.push(PlatformGroup {
                platform: account.platform,
                accounts: vec![account.clone()],
            }),
        }
    }
    groups
}

//! Twitter domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

/// A Twitter account owned by the operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterAccount {
    pub id: String,
    pub username: String,
    pub profile_image: String,
    pub is_active: bool,
    pub follower_count: u64,
    pub following_count: u64,
    pub tweet_count: u64,
    pub last_synced_at: DateTime<Utc>,
}

/// An executor account used by strategies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotAccount {
    pub id: String,
    pub username: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TweetStatus {
    Draft,
    Scheduled,
    Published,
    Failed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweetStats {
    pub likes: u64,
    pub retweets: u64,
    pub replies: u64,
    pub impressions: u64,
}

/// A post. `account_id` refers to a [`TwitterAccount`] by id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tweet {
    pub id: String,
    pub account_id: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_urls: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<DateTime<Utc>>,
    pub status: TweetStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<TweetStats>,
}

/// The engagement an automation rule or strategy action performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EngagementKind {
    Like,
    Retweet,
    Reply,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RateTier {
    Low,
    Medium,
    High,
}

/// What a rule matches on. Every set is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    pub rate: RateTier,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationRule {
    pub id: String,
    pub account_id: String,
    #[serde(rename = "type")]
    pub kind: EngagementKind,
    pub criteria: RuleCriteria,
    pub action: RuleAction,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TargetType {
    Account,
    Tweet,
    Comment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StrategyStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

/// One step of a strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyAction {
    #[serde(rename = "type")]
    pub kind: EngagementKind,
    pub count: u32,
    pub schedule: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_template: Option<String>,
    pub bot_ids: Vec<String>,
}

/// Per-action breakdown of a finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationStat {
    #[serde(rename = "type")]
    pub kind: EngagementKind,
    pub bot_count: u32,
    pub planned_count: u32,
    pub actual_count: u32,
    pub bot_loss: u32,
    pub bot_loss_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyResults {
    pub likes: u32,
    pub retweets: u32,
    pub replies: u32,
    pub bot_loss: u32,
    pub timestamp: DateTime<Utc>,
    pub operation_stats: Vec<OperationStat>,
    pub total_bot_loss_rate: f64,
}

/// A coordinated engagement plan.
///
/// `status` is echoed from the backend. `results` stays `None` until a run
/// completes. `show_results` is a presentation flag and is never sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    pub id: String,
    pub name: String,
    pub bot_account_ids: Vec<String>,
    pub target_type: TargetType,
    pub target_id: String,
    pub actions: Vec<StrategyAction>,
    pub is_active: bool,
    pub status: StrategyStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub results: Option<StrategyResults>,
    #[serde(default, skip_serializing)]
    pub show_results: bool,
}

pub fn active_twitter_accounts(accounts: &[TwitterAccount]) -> Vec<TwitterAccount> {
    accounts.iter().filter(|a| a.is_active).cloned().collect()
}

pub fn active_bot_accounts(bots: &[BotAccount]) -> Vec<BotAccount> {
    bots.iter().filter(|b| b.is_active).cloned().collect()
}

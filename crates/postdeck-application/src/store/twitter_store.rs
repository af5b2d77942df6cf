//! Twitter posting store.
//!
//! Accounts, executor bots, tweets, automation rules and strategies. Rules
//! and strategies are only ever fetched.

use crate::fallback;
use crate::store::OperationTracker;
use chrono::{DateTime, Utc};
use postdeck_core::config::SimulatedDelays;
use postdeck_core::remote::{self, RemoteRequest, RemoteService};
use postdeck_core::twitter::{
    self, AutomationRule, BotAccount, Strategy, Tweet, TwitterAccount,
};
use postdeck_core::{Outcome, Result};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TwitterState {
    pub accounts: Vec<TwitterAccount>,
    pub bot_accounts: Vec<BotAccount>,
    pub tweets: Vec<Tweet>,
    pub automation_rules: Vec<AutomationRule>,
    pub strategies: Vec<Strategy>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewAccountBody<'a> {
    username: &'a str,
    access_token: &'a str,
    access_secret: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewTweetBody<'a> {
    account_id: &'a str,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    media_urls: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scheduled_for: Option<DateTime<Utc>>,
}

pub struct TwitterStore {
    remote: Arc<dyn RemoteService>,
    delays: SimulatedDelays,
    tracker: OperationTracker,
    state: RwLock<TwitterState>,
}

impl TwitterStore {
    pub fn new(remote: Arc<dyn RemoteService>, delays: SimulatedDelays) -> Self {
        Self {
            remote,
            delays,
            tracker: OperationTracker::new(),
            state: RwLock::new(TwitterState::default()),
        }
    }

    pub async fn snapshot(&self) -> TwitterState {
        self.state.read().await.clone()
    }

    pub async fn accounts(&self) -> Vec<TwitterAccount> {
        self.state.read().await.accounts.clone()
    }

    pub async fn bot_accounts(&self) -> Vec<BotAccount> {
        self.state.read().await.bot_accounts.clone()
    }

    pub async fn tweets(&self) -> Vec<Tweet> {
        self.state.read().await.tweets.clone()
    }

    pub async fn automation_rules(&self) -> Vec<AutomationRule> {
        self.state.read().await.automation_rules.clone()
    }

    pub async fn strategies(&self) -> Vec<Strategy> {
        self.state.read().await.strategies.clone()
    }

    pub async fn active_accounts(&self) -> Vec<TwitterAccount> {
        twitter::active_twitter_accounts(&self.state.read().await.accounts)
    }

    pub async fn active_bot_accounts(&self) -> Vec<BotAccount> {
        twitter::active_bot_accounts(&self.state.read().await.bot_accounts)
    }

    pub fn is_loading(&self) -> bool {
        self.tracker.is_loading()
    }

    pub async fn error(&self) -> Option<String> {
        self.tracker.error().await
    }

    pub async fn clear_error(&self) {
        self.tracker.clear_error().await;
    }

    // ============================================================================
    // Fetch operations
    // ============================================================================

    pub async fn fetch_accounts(&self) -> Outcome<Vec<TwitterAccount>> {
        let _op = self.tracker.begin().await;
        let outcome = self
            .fetch_list("/twitter/accounts", "fetch accounts", || {
                fallback::twitter_accounts(Utc::now())
            })
            .await;
        self.state.write().await.accounts = outcome.value().clone();
        outcome
    }

    pub async fn fetch_bot_accounts(&self) -> Outcome<Vec<BotAccount>> {
        let _op = self.tracker.begin().await;
        let outcome = self
            .fetch_list("/twitter/bots", "fetch bot accounts", fallback::bot_accounts)
            .await;
        self.state.write().await.bot_accounts = outcome.value().clone();
        outcome
    }

    pub async fn fetch_tweets(&self) -> Outcome<Vec<Tweet>> {
        let _op = self.tracker.begin().await;
        let outcome = self
            .fetch_list("/twitter/tweets", "fetch tweets", || fallback::tweets(Utc::now()))
            .await;
        self.state.write().await.tweets = outcome.value().clone();
        outcome
    }

    pub async fn fetch_automation_rules(&self) -> Outcome<Vec<AutomationRule>> {
        let _op = self.tracker.begin().await;
        let outcome = self
            .fetch_list("/twitter/automation-rules", "fetch automation rules", || {
                fallback::automation_rules(Utc::now())
            })
            .await;
        self.state.write().await.automation_rules = outcome.value().clone();
        outcome
    }

    /// Fetches strategies. Offline there are none.
    pub async fn fetch_strategies(&self) -> Outcome<Vec<Strategy>> {
        let _op = self.tracker.begin().await;
        let outcome = self
            .fetch_list("/twitter/strategies", "fetch strategies", Vec::new)
            .await;
        self.state.write().await.strategies = outcome.value().clone();
        outcome
    }

    /// GET `path`; on failure waits the fetch delay and substitutes `sample()`.
    async fn fetch_list<T, F>(&self, path: &str, action: &str, sample: F) -> Outcome<Vec<T>>
    where
        T: serde::de::DeserializeOwned,
        F: FnOnce() -> Vec<T>,
    {
        tracing::debug!(path, "Fetching twitter data");
        match remote::fetch_json(self.remote.as_ref(), RemoteRequest::get(path)).await {
            Ok(items) => Outcome::Live(items),
            Err(err) => {
                self.tracker.record_failure(action, &err).await;
                tokio::time::sleep(self.delays.fetch()).await;
                Outcome::fallback(sample(), err)
            }
        }
    }

    // ============================================================================
    // Create operations
    // ============================================================================

    /// Links a Twitter account and appends it to the collection.
    pub async fn add_account(
        &self,
        username: &str,
        access_token: &str,
        access_secret: &str,
    ) -> Outcome<TwitterAccount> {
        let _op = self.tracker.begin().await;
        tracing::debug!(username, "Adding twitter account");

        let body = NewAccountBody {
            username,
            access_token,
            access_secret,
        };
        let err = match self.post_json::<_, TwitterAccount>("/twitter/accounts", &body).await {
            Ok(account) => {
                self.state.write().await.accounts.push(account.clone());
                return Outcome::Live(account);
            }
            Err(err) => err,
        };

        self.tracker.record_failure("add account", &err).await;
        tokio::time::sleep(self.delays.create()).await;

        let mut state = self.state.write().await;
        let account = fallback::new_twitter_account(
            next_id(state.accounts.len()),
            username,
            Utc::now(),
            &mut rand::thread_rng(),
        );
        state.accounts.push(account.clone());
        Outcome::fallback(account, err)
    }

    /// Creates a tweet and appends it to the collection.
    ///
    /// Offline, a tweet with a schedule time is `Scheduled` with no stats;
    /// otherwise it is `Published` with zeroed stats.
    pub async fn create_tweet(
        &self,
        account_id: &str,
        content: &str,
        media_urls: Option<Vec<String>>,
        scheduled_for: Option<DateTime<Utc>>,
    ) -> Outcome<Tweet> {
        let _op = self.tracker.begin().await;
        tracing::debug!(account_id, scheduled = scheduled_for.is_some(), "Creating tweet");

        let body = NewTweetBody {
            account_id,
            content,
            media_urls: media_urls.as_deref(),
            scheduled_for,
        };
        let err = match self.post_json::<_, Tweet>("/twitter/tweets", &body).await {
            Ok(tweet) => {
                self.state.write().await.tweets.push(tweet.clone());
                return Outcome::Live(tweet);
            }
            Err(err) => err,
        };

        self.tracker.record_failure("create tweet", &err).await;
        tokio::time::sleep(self.delays.create()).await;

        let mut state = self.state.write().await;
        let tweet = fallback::new_tweet(
            next_id(state.tweets.len()),
            account_id,
            content,
            media_urls,
            scheduled_for,
            Utc::now(),
        );
        state.tweets.push(tweet.clone());
        Outcome::fallback(tweet, err)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let request = RemoteRequest::post_json(path, body)?;
        remote::fetch_json(self.remote.as_ref(), request).await
    }
}

/// Sequential id for locally created entities: collection length + 1.
///
/// Callers hold the state write lock from here until the push.
fn next_id(len: usize) -> String {
    (len + 1).to_string()
}

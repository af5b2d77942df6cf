//! Accounts and content store.
//!
//! Owns the connected social accounts and the latest generated content,
//! comment and evaluation.

use crate::fallback::{self, ContentTemplates};
use crate::store::OperationTracker;
use chrono::Utc;
use postdeck_core::account::{self, PlatformGroup, SocialAccount};
use postdeck_core::config::SimulatedDelays;
use postdeck_core::content::{
    CommentGenerationRequest, ContentEvaluation, ContentGenerationRequest, PublishRequest,
};
use postdeck_core::remote::{self, RemoteRequest, RemoteService};
use postdeck_core::{Outcome, Result};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SocialMediaState {
    pub accounts: Vec<SocialAccount>,
    pub generated_content: String,
    pub generated_comment: String,
    /// Latest evaluation only.
    pub current_evaluation: Option<ContentEvaluation>,
}

#[derive(Deserialize)]
struct GeneratedContent {
    content: String,
}

#[derive(Deserialize)]
struct GeneratedComment {
    comment: String,
}

pub struct SocialMediaStore {
    remote: Arc<dyn RemoteService>,
    delays: SimulatedDelays,
    templates: ContentTemplates,
    tracker: OperationTracker,
    state: RwLock<SocialMediaState>,
}

impl SocialMediaStore {
    pub fn new(remote: Arc<dyn RemoteService>, delays: SimulatedDelays) -> Self {
        Self {
            remote,
            delays,
            templates: ContentTemplates::new(),
            tracker: OperationTracker::new(),
            state: RwLock::new(SocialMediaState::default()),
        }
    }

    // ============================================================================
    // State and derived views
    // ============================================================================

    pub async fn snapshot(&self) -> SocialMediaState {
        self.state.read().await.clone()
    }

    pub async fn accounts(&self) -> Vec<SocialAccount> {
        self.state.read().await.accounts.clone()
    }

    pub async fn connected_accounts(&self) -> Vec<SocialAccount> {
        account::connected_accounts(&self.state.read().await.accounts)
    }

    pub async fn accounts_by_platform(&self) -> Vec<PlatformGroup> {
        account::group_by_platform(&self.state.read().await.accounts)
    }

    pub async fn generated_content(&self) -> String {
        self.state.read().await.generated_content.clone()
    }

    pub async fn generated_comment(&self) -> String {
        self.state.read().await.generated_comment.clone()
    }

    pub async fn current_evaluation(&self) -> Option<ContentEvaluation> {
        self.state.read().await.current_evaluation.clone()
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

    /// Forgets generated content, comment and evaluation.
    pub async fn reset_content(&self) {
        let mut state = self.state.write().await;
        state.generated_content.clear();
        state.generated_comment.clear();
        state.current_evaluation = None;
    }

    // ============================================================================
    // Operations
    // ============================================================================

    /// Loads the account list, replacing the current one.
    pub async fn fetch_accounts(&self) -> Outcome<Vec<SocialAccount>> {
        let _op = self.tracker.begin().await;
        tracing::debug!("Fetching social accounts");

        let request = RemoteRequest::get("/accounts");
        let outcome = match remote::fetch_json(self.remote.as_ref(), request).await {
            Ok(accounts) => Outcome::Live(accounts),
            Err(err) => {
                self.tracker.record_failure("fetch accounts", &err).await;
                Outcome::fallback(fallback::social_accounts(Utc::now()), err)
            }
        };

        self.state.write().await.accounts = outcome.value().clone();
        outcome
    }

    pub async fn generate_content(&self, request: &ContentGenerationRequest) -> Outcome<String> {
        let _op = self.tracker.begin().await;
        tracing::debug!(topic = %request.topic, platform = %request.platform, "Generating content");

        let result: Result<GeneratedContent> = self.post_json("/content/generate", request).await;
        let outcome = match result {
            Ok(generated) => Outcome::Live(generated.content),
            Err(err) => {
                self.tracker.record_failure("generate content", &err).await;
                let sample = self.templates.render(&request.platform, &request.topic);
                Outcome::fallback(sample, err)
            }
        };

        self.state.write().await.generated_content = outcome.value().clone();
        outcome
    }

    pub async fn generate_comment(&self, request: &CommentGenerationRequest) -> Outcome<String> {
        let _op = self.tracker.begin().await;
        tracing::debug!(comment_type = %request.comment_type, "Generating comment");

        let result: Result<GeneratedComment> = self.post_json("/comment/generate", request).await;
        let outcome = match result {
            Ok(generated) => Outcome::Live(generated.comment),
            Err(err) => {
                self.tracker.record_failure("generate comment", &err).await;
                Outcome::fallback(fallback::comment(request.comment_type), err)
            }
        };

        self.state.write().await.generated_comment = outcome.value().clone();
        outcome
    }

    pub async fn evaluate_content(&self, content: &str) -> Outcome<ContentEvaluation> {
        let _op = self.tracker.begin().await;
        tracing::debug!(length = content.len(), "Evaluating content");

        let result: Result<ContentEvaluation> = self
            .post_json("/content/evaluate", &json!({ "content": content }))
            .await
            .and_then(ContentEvaluation::within_bounds);
        let outcome = match result {
            Ok(evaluation) => Outcome::Live(evaluation),
            Err(err) => {
                self.tracker.record_failure("evaluate content", &err).await;
                let evaluation = fallback::evaluation(&mut rand::thread_rng());
                Outcome::fallback(evaluation, err)
            }
        };

        self.state.write().await.current_evaluation = Some(outcome.value().clone());
        outcome
    }

    /// Publishes (or schedules) content. The fallback reports success after
    /// the simulated publish delay.
    pub async fn publish_content(&self, request: &PublishRequest) -> Outcome<bool> {
        let _op = self.tracker.begin().await;
        tracing::debug!(accounts = request.accounts.len(), "Publishing content");

        let result = match RemoteRequest::post_json("/content/publish", request) {
            Ok(req) => remote::expect_success(self.remote.as_ref(), req).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(_) => Outcome::Live(true),
            Err(err) => {
                self.tracker.record_failure("publish content", &err).await;
                tokio::time::sleep(self.delays.publish_fallback()).await;
                Outcome::fallback(true, err)
            }
        }
    }

    /// Connects a platform account, then reloads the account list.
    ///
    /// Nothing is fabricated when the backend refuses: the fallback is `false`.
    pub async fn connect_account(&self, platform: &str, credentials: Value) -> Outcome<bool> {
        let _op = self.tracker.begin().await;
        tracing::debug!(platform, "Connecting account");

        let body = json!({ "platform": platform, "credentials": credentials });
        let result = match RemoteRequest::post_json("/accounts/connect", &body) {
            Ok(req) => remote::expect_success(self.remote.as_ref(), req).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(_) => {
                self.fetch_accounts().await;
                Outcome::Live(true)
            }
            Err(err) => {
                self.tracker.record_failure("connect account", &err).await;
                Outcome::fallback(false, err)
            }
        }
    }

    /// Marks an account disconnected.
    ///
    /// The local flag is cleared only once the backend confirms, and an
    /// unknown id leaves the collection untouched. Always reports `true`.
    pub async fn disconnect_account(&self, account_id: &str) -> Outcome<bool> {
        let _op = self.tracker.begin().await;
        tracing::debug!(account_id, "Disconnecting account");

        let path = format!("/accounts/{account_id}/disconnect");
        match remote::expect_success(self.remote.as_ref(), RemoteRequest::post(path)).await {
            Ok(_) => {
                let mut state = self.state.write().await;
                if let Some(account) = state.accounts.iter_mut().find(|a| a.id == account_id) {
                    account.is_connected = false;
                }
                Outcome::Live(true)
            }
            Err(err) => {
                self.tracker.record_failure("disconnect account", &err).await;
                Outcome::fallback(true, err)
            }
        }
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: serde::Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let request = RemoteRequest::post_json(path, body)?;
        remote::fetch_json(self.remote.as_ref(), request).await
    }
}

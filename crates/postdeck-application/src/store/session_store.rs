//! Operator session store.
//!
//! Holds the signed-in identity and the bearer token. The token is mirrored
//! in two places outside this store: durable storage under
//! [`AUTH_TOKEN_KEY`] and the remote service's default Authorization header.
//! All three are changed under one write lock.

use crate::fallback;
use crate::store::OperationTracker;
use postdeck_core::config::SimulatedDelays;
use postdeck_core::remote::{self, RemoteRequest, RemoteService};
use postdeck_core::storage::DurableStorage;
use postdeck_core::user::{AUTH_TOKEN_KEY, User};
use postdeck_core::{Outcome, Result};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub auth_token: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }
}

pub struct SessionStore {
    remote: Arc<dyn RemoteService>,
    storage: Arc<dyn DurableStorage>,
    delays: SimulatedDelays,
    tracker: OperationTracker,
    state: RwLock<SessionState>,
}

impl SessionStore {
    pub fn new(
        remote: Arc<dyn RemoteService>,
        storage: Arc<dyn DurableStorage>,
        delays: SimulatedDelays,
    ) -> Self {
        Self {
            remote,
            storage,
            delays,
            tracker: OperationTracker::new(),
            state: RwLock::new(SessionState::default()),
        }
    }

    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }

    pub async fn user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    pub async fn auth_token(&self) -> Option<String> {
        self.state.read().await.auth_token.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.tracker.is_loading()
    }

    pub async fn error(&self) -> Option<String> {
        self.tracker.error().await
    }

    // ============================================================================
    // Token management
    // ============================================================================

    /// Persists `token`, installs it as the default bearer header, and
    /// stores it in state.
    ///
    /// If persisting fails, nothing changes and the error is returned.
    pub async fn set_auth_token(&self, token: &str) -> Result<()> {
        let mut state = self.state.write().await;
        self.apply_token(&mut state, token).await
    }

    /// Forgets the identity and token everywhere they are mirrored.
    pub async fn clear_auth(&self) -> Result<()> {
        let mut state = self.state.write().await;
        self.storage.remove_item(AUTH_TOKEN_KEY).await?;
        self.remote.set_bearer_token(None).await;
        *state = SessionState::default();
        tracing::info!("Session cleared");
        Ok(())
    }

    /// Re-applies a token persisted by an earlier run.
    ///
    /// Returns whether a session was restored. A storage read failure is
    /// logged and treated as no session.
    pub async fn restore(&self) -> bool {
        let mut state = self.state.write().await;
        let token = match self.storage.get_item(AUTH_TOKEN_KEY).await {
            Ok(Some(token)) => token,
            Ok(None) => return false,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read persisted session");
                return false;
            }
        };

        self.remote.set_bearer_token(Some(token.clone())).await;
        state.auth_token = Some(token);
        tracing::info!("Session restored from storage");
        true
    }

    async fn apply_token(&self, state: &mut SessionState, token: &str) -> Result<()> {
        self.storage.set_item(AUTH_TOKEN_KEY, token).await?;
        self.remote.set_bearer_token(Some(token.to_string())).await;
        state.auth_token = Some(token.to_string());
        Ok(())
    }

    // ============================================================================
    // Operations
    // ============================================================================

    /// Signs in after the simulated login delay.
    ///
    /// Credentials are not checked here; any pair yields a fresh token and
    /// the admin identity carrying `email`. Returns `false` only when the
    /// token could not be persisted.
    pub async fn login(&self, email: &str, _password: &str) -> bool {
        let _op = self.tracker.begin().await;
        tracing::debug!(email, "Logging in");

        tokio::time::sleep(self.delays.login()).await;
        let token = fallback::issue_token(&mut rand::thread_rng());

        let result = {
            let mut state = self.state.write().await;
            let result = self.apply_token(&mut state, &token).await;
            if result.is_ok() {
                state.user = Some(fallback::admin_user(email));
            }
            result
        };

        match result {
            Ok(()) => {
                tracing::info!(email, "Logged in");
                true
            }
            Err(err) => {
                self.tracker.record_failure("login", &err).await;
                false
            }
        }
    }

    /// Signs out after the simulated logout delay.
    pub async fn logout(&self) -> bool {
        let _op = self.tracker.begin().await;

        tokio::time::sleep(self.delays.logout()).await;
        match self.clear_auth().await {
            Ok(()) => true,
            Err(err) => {
                self.tracker.record_failure("logout", &err).await;
                false
            }
        }
    }

    /// Loads the profile of the signed-in operator.
    ///
    /// `None` when there is no session; otherwise the backend profile or,
    /// failing that, the fixed admin profile.
    pub async fn fetch_user_info(&self) -> Option<Outcome<User>> {
        if !self.is_authenticated().await {
            return None;
        }
        let _op = self.tracker.begin().await;
        tracing::debug!("Fetching user info");

        let outcome = match remote::fetch_json(self.remote.as_ref(), RemoteRequest::get("/users/me")).await {
            Ok(user) => Outcome::Live(user),
            Err(err) => {
                self.tracker.record_failure("fetch user info", &err).await;
                tokio::time::sleep(self.delays.user_info()).await;
                Outcome::fallback(fallback::admin_user(fallback::ADMIN_EMAIL), err)
            }
        };

        self.state.write().await.user = Some(outcome.value().clone());
        Some(outcome)
    }
}

#![allow(dead_code)]

use async_trait::async_trait;
use postdeck_core::remote::{HttpMethod, RemoteRequest, RemoteResponse, RemoteService};
use postdeck_core::storage::DurableStorage;
use postdeck_core::{DashboardError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// A request as the mock saw it, with the bearer token applied at send time.
#[derive(Debug, Clone)]
pub struct SentRequest {
    pub request: RemoteRequest,
    pub bearer: Option<String>,
}

/// Remote service answering from a script keyed by `"METHOD /path"`.
///
/// Unscripted requests fail as transport errors, so every store falls back
/// unless a test says otherwise.
#[derive(Default)]
pub struct ScriptedRemote {
    responses: Mutex<HashMap<String, Result<RemoteResponse>>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    bearer: Mutex<Option<String>>,
    sent: Mutex<Vec<SentRequest>>,
}

fn key(method: HttpMethod, path: &str) -> String {
    format!("{method} {path}")
}

impl ScriptedRemote {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, method: HttpMethod, path: &str, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(key(method, path), Ok(RemoteResponse::new(status, body)));
    }

    pub fn respond_json(&self, method: HttpMethod, path: &str, body: serde_json::Value) {
        self.respond(method, path, 200, &body.to_string());
    }

    /// Holds requests to `path` until the returned handle is notified.
    pub fn gate(&self, method: HttpMethod, path: &str) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.gates
            .lock()
            .unwrap()
            .insert(key(method, path), notify.clone());
        notify
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self, path: &str) -> Vec<SentRequest> {
        self.sent()
            .into_iter()
            .filter(|s| s.request.path == path)
            .collect()
    }
}

#[async_trait]
impl RemoteService for ScriptedRemote {
    async fn send(&self, request: RemoteRequest) -> Result<RemoteResponse> {
        let key = key(request.method, &request.path);
        let bearer = self.bearer.lock().unwrap().clone();
        self.sent.lock().unwrap().push(SentRequest {
            request: request.clone(),
            bearer,
        });

        let gate = self.gates.lock().unwrap().get(&key).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.responses
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Err(DashboardError::transport(format!("nothing scripted for {key}"))))
    }

    async fn set_bearer_token(&self, token: Option<String>) {
        *self.bearer.lock().unwrap() = token;
    }

    async fn bearer_token(&self) -> Option<String> {
        self.bearer.lock().unwrap().clone()
    }
}

/// Storage whose writes always fail; reads see nothing.
pub struct BrokenStorage;

#[async_trait]
impl DurableStorage for BrokenStorage {
    async fn get_item(&self, _key: &str) -> Result<Option<String>> {
        Err(DashboardError::storage("disk unavailable"))
    }

    async fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
        Err(DashboardError::storage("disk unavailable"))
    }

    async fn remove_item(&self, _key: &str) -> Result<()> {
        Err(DashboardError::storage("disk unavailable"))
    }
}

pub fn social_account_json(id: &str, platform: &str, is_connected: bool) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "platform": platform,
        "username": format!("user_{id}"),
        "displayName": format!("User {id}"),
        "profileImage": "https://via.placeholder.com/64",
        "isConnected": is_connected,
        "followerCount": 10,
        "followingCount": 5,
        "postsCount": 3,
        "lastSyncedAt": "2024-05-01T10:00:00Z"
    })
}

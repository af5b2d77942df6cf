//! HttpRemoteService - reqwest implementation of the backend client.
//!
//! Requests are addressed as `<base url><path>`. The bearer token set by the
//! session store is attached to every request as the default
//! `Authorization` header.

use async_trait::async_trait;
use postdeck_core::config::ApiSettings;
use postdeck_core::remote::{HttpMethod, RemoteRequest, RemoteResponse, RemoteService};
use postdeck_core::{DashboardError, Result};
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, Request};
use tokio::sync::RwLock;

/// Backend client talking JSON over HTTP.
pub struct HttpRemoteService {
    client: Client,
    base_url: String,
    bearer_token: RwLock<Option<String>>,
}

impl HttpRemoteService {
    /// Creates a client for an absolute base URL (trailing slash optional).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token: RwLock::new(None),
        }
    }

    /// Creates a client from the `[api]` settings.
    pub fn from_settings(settings: &ApiSettings) -> Self {
        Self::new(settings.resolved_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Builds the outgoing request without sending it.
    pub async fn build_request(&self, request: &RemoteRequest) -> Result<Request> {
        let url = self.url_for(&request.path);
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };

        if let Some(token) = self.bearer_token.read().await.as_deref() {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| DashboardError::internal(format!("invalid bearer token: {e}")))?;
            builder = builder.header(AUTHORIZATION, value);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        builder
            .build()
            .map_err(|e| DashboardError::transport(format!("invalid request for {url}: {e}")))
    }
}

#[async_trait]
impl RemoteService for HttpRemoteService {
    async fn send(&self, request: RemoteRequest) -> Result<RemoteResponse> {
        tracing::debug!(method = %request.method, path = %request.path, "Sending backend request");

        let outgoing = self.build_request(&request).await?;
        let response = self.client.execute(outgoing).await.map_err(|err| {
            DashboardError::transport(format!("{} {} failed: {err}", request.method, request.path))
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|err| {
            DashboardError::transport(format!("Failed to read response body: {err}"))
        })?;

        tracing::debug!(status, path = %request.path, "Backend responded");
        Ok(RemoteResponse::new(status, body))
    }

    async fn set_bearer_token(&self, token: Option<String>) {
        *self.bearer_token.write().await = token;
    }

    async fn bearer_token(&self) -> Option<String> {
        self.bearer_token.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::CONTENT_TYPE;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_request_url_and_body() {
        let service = HttpRemoteService::new("http://localhost:5173/api/");
        let request = RemoteRequest::post_json("/content/evaluate", &json!({ "content": "x" })).unwrap();

        let built = service.build_request(&request).await.unwrap();
        assert_eq!(built.method(), reqwest::Method::POST);
        assert_eq!(built.url().as_str(), "http://localhost:5173/api/content/evaluate");
        assert_eq!(
            built.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert!(built.headers().get(AUTHORIZATION).is_none());

        let bytes = built.body().and_then(|b| b.as_bytes()).unwrap();
        let sent: Value = serde_json::from_slice(bytes).unwrap();
        assert_eq!(sent, json!({ "content": "x" }));
    }

    #[tokio::test]
    async fn test_bearer_header_follows_token() {
        let service = HttpRemoteService::new("http://localhost:5173/api");
        service.set_bearer_token(Some("tok-1".to_string())).await;

        let built = service.build_request(&RemoteRequest::get("/accounts")).await.unwrap();
        assert_eq!(built.headers().get(AUTHORIZATION).unwrap(), "Bearer tok-1");

        service.set_bearer_token(None).await;
        let built = service.build_request(&RemoteRequest::get("/accounts")).await.unwrap();
        assert!(built.headers().get(AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        // Port 1 is reserved and refuses connections on loopback
        let service = HttpRemoteService::new("http://127.0.0.1:1/api");
        let err = service.send(RemoteRequest::get("/accounts")).await.unwrap_err();
        assert!(err.is_transport());
    }
}

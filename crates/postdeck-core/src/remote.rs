//! Remote service interface consumed by the stores.
//!
//! The dashboard backend is an opaque HTTP service answering JSON. Stores see
//! it only through [`RemoteService`], which keeps them testable without a
//! network and lets the infrastructure layer pick the HTTP client.

use crate::error::{DashboardError, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

/// A request addressed relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteRequest {
    pub method: HttpMethod,
    /// Path below the base URL, starting with `/`.
    pub path: String,
    pub body: Option<Value>,
}

impl RemoteRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            body: None,
        }
    }

    /// A POST without a body.
    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            body: None,
        }
    }

    /// A POST carrying `body` serialized as JSON.
    pub fn post_json<B: Serialize + ?Sized>(path: impl Into<String>, body: &B) -> Result<Self> {
        Ok(Self {
            method: HttpMethod::Post,
            path: path.into(),
            body: Some(serde_json::to_value(body)?),
        })
    }
}

/// Status code and raw body of a completed exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteResponse {
    pub status: u16,
    pub body: String,
}

impl RemoteResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parses the body. A body that does not match `T` is a `Decode` error.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|e| DashboardError::decode(e.to_string()))
    }
}

/// Request/response primitive for the dashboard backend.
///
/// Implementations make exactly one attempt per `send`; no retries, no
/// timeout. Every request carries `Authorization: Bearer <token>` while a
/// bearer token is set.
#[async_trait]
pub trait RemoteService: Send + Sync {
    /// Performs one exchange.
    ///
    /// # Returns
    ///
    /// - `Ok(RemoteResponse)`: The service answered (any status)
    /// - `Err(DashboardError::Transport)`: The service could not be reached
    async fn send(&self, request: RemoteRequest) -> Result<RemoteResponse>;

    /// Sets or clears the default bearer token for subsequent requests.
    async fn set_bearer_token(&self, token: Option<String>);

    /// The bearer token currently applied to requests.
    async fn bearer_token(&self) -> Option<String>;
}

/// Sends `request` and decodes a successful JSON body.
///
/// Non-success statuses become `Status` errors, unparseable bodies become
/// `Decode` errors.
pub async fn fetch_json<T: DeserializeOwned>(
    remote: &dyn RemoteService,
    request: RemoteRequest,
) -> Result<T> {
    let response = expect_success(remote, request).await?;
    response.json()
}

/// Sends `request` and discards the body of a successful response.
pub async fn expect_success(
    remote: &dyn RemoteService,
    request: RemoteRequest,
) -> Result<RemoteResponse> {
    let path = request.path.clone();
    let response = remote.send(request).await?;
    if !response.is_success() {
        return Err(DashboardError::status(
            response.status,
            format!("request to {path} was rejected"),
        ));
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct CannedRemote {
        response: Result<RemoteResponse>,
        seen: Mutex<Vec<RemoteRequest>>,
    }

    #[async_trait]
    impl RemoteService for CannedRemote {
        async fn send(&self, request: RemoteRequest) -> Result<RemoteResponse> {
            self.seen.lock().unwrap().push(request);
            self.response.clone()
        }

        async fn set_bearer_token(&self, _token: Option<String>) {}

        async fn bearer_token(&self) -> Option<String> {
            None
        }
    }

    fn canned(response: Result<RemoteResponse>) -> CannedRemote {
        CannedRemote {
            response,
            seen: Mutex::new(Vec::new()),
        }
    }

    #[tokio::test]
    async fn test_fetch_json_success() {
        let remote = canned(Ok(RemoteResponse::new(200, r#"{"content":"hi"}"#)));
        let value: Value = fetch_json(&remote, RemoteRequest::get("/x")).await.unwrap();
        assert_eq!(value["content"], "hi");
        assert_eq!(remote.seen.lock().unwrap()[0].method, HttpMethod::Get);
    }

    #[tokio::test]
    async fn test_fetch_json_maps_status() {
        let remote = canned(Ok(RemoteResponse::new(500, "boom")));
        let err = fetch_json::<Value>(&remote, RemoteRequest::get("/x"))
            .await
            .unwrap_err();
        assert!(matches!(err, DashboardError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_fetch_json_maps_malformed_body() {
        let remote = canned(Ok(RemoteResponse::new(200, "<html>")));
        let err = fetch_json::<Vec<u32>>(&remote, RemoteRequest::get("/x"))
            .await
            .unwrap_err();
        assert!(err.is_decode());
    }

    #[tokio::test]
    async fn test_fetch_json_passes_transport_errors() {
        let remote = canned(Err(DashboardError::transport("connection refused")));
        let err = fetch_json::<Value>(&remote, RemoteRequest::get("/x"))
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn test_post_json_serializes_body() {
        #[derive(Serialize)]
        struct Body {
            content: &'static str,
        }
        let request = RemoteRequest::post_json("/content/evaluate", &Body { content: "x" }).unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body.unwrap()["content"], "x");
    }
}

//! HTTP transport abstraction
//!
//! The clients only need two request shapes: a form-encoded POST (login) and
//! a JSON POST with an optional bearer token (chat). Backends return the raw
//! status and body; status interpretation lives in the clients.
//!
//! Futures are `?Send` so the trait can be implemented over the browser's
//! `fetch`, whose futures are not `Send`.

#[cfg(feature = "native")]
pub mod native;

#[cfg(feature = "native")]
pub use native::ReqwestBackend;

use crate::types::{ClientError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Raw response from a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON. A decode failure is a malformed response.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body)
            .map_err(|e| ClientError::MalformedResponse(format!("Failed to parse response: {}", e)))
    }
}

/// Transport used by the auth and chat clients.
///
/// Implementations map "no response at all" to [`ClientError::Network`] and
/// return every received response, whatever its status, as `Ok`.
#[async_trait(?Send)]
pub trait HttpBackend {
    /// POST `fields` as `application/x-www-form-urlencoded`.
    async fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<HttpResponse>;

    /// POST `body` as JSON, with `Authorization: Bearer <token>` when given.
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        bearer: Option<&str>,
    ) -> Result<HttpResponse>;
}

//! `reqwest` backend for native builds.

use super::{HttpBackend, HttpResponse};
use crate::types::{ClientError, Result};
use async_trait::async_trait;
use tracing::debug;

/// [`HttpBackend`] over a shared `reqwest::Client`.
///
/// No timeout is configured; a hung request stays pending.
#[derive(Debug, Clone, Default)]
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new() -> Self {
        Self::default()
    }

    async fn read(resp: reqwest::Response) -> Result<HttpResponse> {
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| ClientError::Network(format!("Failed to read response body: {}", e)))?;
        debug!(status, "Response received");
        Ok(HttpResponse { status, body })
    }
}

#[async_trait(?Send)]
impl HttpBackend for ReqwestBackend {
    async fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<HttpResponse> {
        debug!(url, "POST form");
        let resp = self
            .client
            .post(url)
            .form(fields)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Self::read(resp).await
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        bearer: Option<&str>,
    ) -> Result<HttpResponse> {
        debug!(url, authenticated = bearer.is_some(), "POST json");
        let mut req = self.client.post(url).json(body);
        if let Some(token) = bearer {
            req = req.bearer_auth(token);
        }
        let resp = req
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Self::read(resp).await
    }
}

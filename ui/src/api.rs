//! `fetch`-based HTTP backend for the campus API

use async_trait::async_trait;
use campus_chat::types::{ClientError, Result};
use campus_chat::{HttpBackend, HttpResponse};
use gloo_net::http::{Request, Response};
use web_sys::UrlSearchParams;

/// [`HttpBackend`] over the browser's `fetch` via gloo-net.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooBackend;

async fn read(resp: Response) -> Result<HttpResponse> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ClientError::Network(format!("Failed to read response body: {}", e)))?;
    tracing::debug!(status, "Response received");
    Ok(HttpResponse::new(status, body))
}

#[async_trait(?Send)]
impl HttpBackend for GlooBackend {
    async fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<HttpResponse> {
        let params = UrlSearchParams::new()
            .map_err(|e| ClientError::Validation(format!("Failed to build form: {:?}", e)))?;
        for (name, value) in fields {
            params.append(name, value);
        }

        // fetch sets the urlencoded content type for a URLSearchParams body.
        let resp = Request::post(url)
            .body(params)
            .map_err(|e| ClientError::Validation(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        read(resp).await
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        bearer: Option<&str>,
    ) -> Result<HttpResponse> {
        let mut req = Request::post(url);
        if let Some(token) = bearer {
            req = req.header("Authorization", &format!("Bearer {}", token));
        }

        let resp = req
            .json(body)
            .map_err(|e| ClientError::Validation(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        read(resp).await
    }
}

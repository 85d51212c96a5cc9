//! Transport seam between the fetch cache and the content store

use std::future::Future;

use anyhow::Context;
use serde_json::Value;

use crate::error::TransportError;

/// A fetched document whose body can be read as JSON
pub trait Payload: Send {
    fn json(self) -> impl Future<Output = Result<Value, TransportError>> + Send;
}

/// Fetches documents from the content store by URL.
///
/// Implementations must report a missing document as
/// [`TransportError::NotFound`] so the cache can tell "no such format" apart
/// from a failed request. Retries, if any, belong here too; the cache never
/// retries.
pub trait Transport: Send + Sync {
    type Response: Payload;

    fn fetch(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<Self::Response, TransportError>> + Send;
}

/// Already-parsed documents, for in-memory transports
impl Payload for Value {
    async fn json(self) -> Result<Value, TransportError> {
        Ok(self)
    }
}

impl Payload for reqwest::Response {
    async fn json(self) -> Result<Value, TransportError> {
        let value = reqwest::Response::json::<Value>(self)
            .await
            .context("Failed to decode response body")?;
        Ok(value)
    }
}

/// HTTP transport backed by `reqwest`
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (timeouts, proxies, user agent)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    type Response = reqwest::Response;

    async fn fetch(&self, url: &str) -> Result<reqwest::Response, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to request {}", url))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(TransportError::NotFound {
                url: url.to_string(),
            });
        }

        let response = response
            .error_for_status()
            .with_context(|| format!("Request to {} failed", url))?;
        Ok(response)
    }
}

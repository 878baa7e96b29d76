//! HTTP client for the counting service.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Instant;

use crate::config::FetchConfig;

use super::error::FetchError;

/// Something that can be asked for a counter delta.
///
/// The amount is passed through untouched; the source decides the delta.
#[async_trait]
pub trait CountSource: Send + Sync {
    /// Short description for the header and logs.
    fn name(&self) -> &str;

    /// Request a delta for `amount`.
    async fn fetch_delta(&self, amount: u32) -> Result<i64, FetchError>;
}

#[derive(Debug, Deserialize)]
struct CountResponse {
    data: i64,
}

/// [`CountSource`] backed by `GET {endpoint}?amount={amount}`.
pub struct HttpCountSource {
    client: Client,
    endpoint: Url,
    name: String,
}

impl HttpCountSource {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| FetchError::InvalidEndpoint {
            endpoint: config.endpoint.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self {
            client,
            name: config.endpoint.clone(),
            endpoint,
        })
    }

    /// Endpoint with the `amount` query parameter appended.
    ///
    /// Existing query parameters on the configured endpoint are kept.
    pub fn request_url(&self, amount: u32) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("amount", &amount.to_string());
        url
    }
}

#[async_trait]
impl CountSource for HttpCountSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_delta(&self, amount: u32) -> Result<i64, FetchError> {
        let url = self.request_url(amount);

        tracing::debug!(url = %url, amount, "Sending count request");

        let start = Instant::now();
        let response = self.client.get(url).send().await?;
        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::warn!(status = %status, latency_ms, "Counting service error");

            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let parsed: CountResponse = serde_json::from_str(&text)
            .map_err(|e| FetchError::Payload(format!("Failed to parse response JSON: {}", e)))?;

        tracing::debug!(delta = parsed.data, latency_ms, "Count request completed");
        Ok(parsed.data)
    }
}

//! HTTP client for a single review provider.
//!
//! Providers answer `GET <url>` with a JSON envelope
//! `{ status: "success" | "error", result: Review[], message? }`.
//! Transport failures, non-2xx statuses, `status: "error"` bodies, and
//! payloads that do not match the review shape all surface as a
//! [`SourceError`]; deciding what to do with them is the aggregator's job.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use reviewdesk_core::review::{Review, ReviewSource};

use crate::aggregator::ReviewProvider;

/// Top-level status carried in every provider envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// Body returned by a provider endpoint.
#[derive(Debug, Deserialize)]
pub struct ProviderEnvelope {
    pub status: EnvelopeStatus,
    #[serde(default)]
    pub result: Vec<Review>,
    #[serde(default)]
    pub message: Option<String>,
    /// Record count, reported by some providers only.
    #[serde(default)]
    pub total: Option<usize>,
}

impl ProviderEnvelope {
    /// The reported total, when it disagrees with the records returned.
    pub fn total_mismatch(&self) -> Option<usize> {
        self.total.filter(|&total| total != self.result.len())
    }
}

/// Errors from fetching one provider.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Provider API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider answered with `status: "error"`.
    #[error("Provider reported failure: {message}")]
    Rejected { message: String },

    /// The body was not a valid provider envelope.
    #[error("Malformed provider payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The fetch did not settle within the configured bound.
    #[error("Provider did not respond within {0:?}")]
    Timeout(Duration),
}

/// HTTP client for one provider endpoint.
pub struct ProviderClient {
    client: reqwest::Client,
    source: ReviewSource,
    url: String,
}

impl ProviderClient {
    /// Create a client for the provider tagged `source` at `url`.
    pub fn new(source: ReviewSource, url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), source, url)
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (shares the connection pool across providers).
    pub fn with_client(client: reqwest::Client, source: ReviewSource, url: impl Into<String>) -> Self {
        Self {
            client,
            source,
            url: url.into(),
        }
    }

    /// Fetch and unwrap the provider envelope.
    ///
    /// The returned reviews are untagged; the aggregator assigns `source`.
    pub async fn fetch(&self) -> Result<Vec<Review>, SourceError> {
        let response = self.client.get(&self.url).send().await?;
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        let reviews = parse_envelope(&bytes)?;

        tracing::debug!(
            source = %self.source,
            count = reviews.len(),
            "Fetched provider reviews"
        );
        Ok(reviews)
    }

    // ---- private helpers ----

    /// Return the response unchanged on a 2xx status, otherwise a
    /// [`SourceError::Api`] carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, SourceError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(SourceError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

/// Decode a provider body, treating `status: "error"` as a failure.
pub fn parse_envelope(bytes: &[u8]) -> Result<Vec<Review>, SourceError> {
    let envelope: ProviderEnvelope = serde_json::from_slice(bytes)?;
    if let Some(reported) = envelope.total_mismatch() {
        tracing::warn!(
            reported,
            received = envelope.result.len(),
            "Provider total disagrees with records returned"
        );
    }
    match envelope.status {
        EnvelopeStatus::Success => Ok(envelope.result),
        EnvelopeStatus::Error => Err(SourceError::Rejected {
            message: envelope
                .message
                .unwrap_or_else(|| "no message".to_string()),
        }),
    }
}

#[async_trait]
impl ReviewProvider for ProviderClient {
    fn source(&self) -> ReviewSource {
        self.source
    }

    async fn fetch_reviews(&self) -> Result<Vec<Review>, SourceError> {
        self.fetch().await
    }
}

//! Settle-all merge over independent review providers.
//!
//! Every provider is fetched concurrently under its own timeout. Each fetch
//! settles into a [`SourceOutcome`]; failures are logged and contribute no
//! records. The merged sequence is the concatenation of the successful
//! sources in [`ReviewSource`] order, so a slow provider never changes the
//! result order.

use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use serde::Serialize;

use reviewdesk_core::review::{Review, ReviewSource};

use crate::client::{ProviderClient, SourceError};

/// Default per-source fetch bound.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// A provider of raw review records.
#[async_trait]
pub trait ReviewProvider: Send + Sync {
    /// Tag assigned to every record this provider yields.
    fn source(&self) -> ReviewSource;

    /// Fetch the provider's records, untagged.
    async fn fetch_reviews(&self) -> Result<Vec<Review>, SourceError>;
}

/// How one provider's fetch settled.
#[derive(Debug)]
pub struct SourceOutcome {
    pub source: ReviewSource,
    pub result: Result<Vec<Review>, SourceError>,
}

/// Per-source line of an [`AggregateReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceSummary {
    pub source: ReviewSource,
    pub ok: bool,
    /// Records contributed to the merged result.
    pub count: usize,
    /// Records dropped for violating rating invariants.
    pub dropped: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Merged reviews plus what happened to each source.
#[derive(Debug, Clone, Default)]
pub struct AggregateReport {
    pub reviews: Vec<Review>,
    pub sources: Vec<SourceSummary>,
}

impl AggregateReport {
    pub fn failed_sources(&self) -> impl Iterator<Item = &SourceSummary> {
        self.sources.iter().filter(|s| !s.ok)
    }
}

/// Fans out to every registered provider and merges the results.
pub struct Aggregator {
    providers: Vec<Box<dyn ReviewProvider>>,
    fetch_timeout: Duration,
}

impl Aggregator {
    pub fn new(fetch_timeout: Duration) -> Self {
        Self {
            providers: Vec::new(),
            fetch_timeout,
        }
    }

    /// Aggregator over the two HTTP providers, sharing one connection pool.
    pub fn from_urls(provider_a_url: &str, provider_b_url: &str, fetch_timeout: Duration) -> Self {
        let client = reqwest::Client::new();
        Self::new(fetch_timeout)
            .with_provider(ProviderClient::with_client(
                client.clone(),
                ReviewSource::ProviderA,
                provider_a_url,
            ))
            .with_provider(ProviderClient::with_client(
                client,
                ReviewSource::ProviderB,
                provider_b_url,
            ))
    }

    pub fn with_provider(mut self, provider: impl ReviewProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Fetch every provider concurrently and wait for all to settle.
    pub async fn settle_all(&self) -> Vec<SourceOutcome> {
        let fetches = self.providers.iter().map(|provider| async move {
            let source = provider.source();
            let result = match tokio::time::timeout(self.fetch_timeout, provider.fetch_reviews()).await
            {
                Ok(result) => result,
                Err(_) => Err(SourceError::Timeout(self.fetch_timeout)),
            };
            SourceOutcome { source, result }
        });
        join_all(fetches).await
    }

    /// Fetch and merge. Never fails: a source that errors contributes zero
    /// records, and if every source errors the result is empty.
    pub async fn fetch_all(&self) -> AggregateReport {
        let report = merge(self.settle_all().await);
        tracing::info!(
            total = report.reviews.len(),
            failed = report.failed_sources().count(),
            "Aggregated reviews"
        );
        report
    }
}

/// Merge settled outcomes into one tagged sequence, in source order.
///
/// Records that fail [`Review::validate`] are dropped individually; the
/// rest of their source still counts.
pub fn merge(mut outcomes: Vec<SourceOutcome>) -> AggregateReport {
    outcomes.sort_by_key(|o| o.source);

    let mut report = AggregateReport::default();
    for outcome in outcomes {
        let source = outcome.source;
        match outcome.result {
            Ok(records) => {
                let total = records.len();
                let valid: Vec<Review> = records
                    .into_iter()
                    .filter(|review| match review.validate() {
                        Ok(()) => true,
                        Err(e) => {
                            tracing::warn!(source = %source, error = %e, "Dropping invalid review");
                            false
                        }
                    })
                    .map(|review| review.with_source(source))
                    .collect();

                report.sources.push(SourceSummary {
                    source,
                    ok: true,
                    count: valid.len(),
                    dropped: total - valid.len(),
                    error: None,
                });
                report.reviews.extend(valid);
            }
            Err(e) => {
                tracing::warn!(source = %source, error = %e, "Review source failed; skipping");
                report.sources.push(SourceSummary {
                    source,
                    ok: false,
                    count: 0,
                    dropped: 0,
                    error: Some(e.to_string()),
                });
            }
        }
    }
    report
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use std::sync::Arc;

use tokio::sync::RwLock;

use reviewdesk_core::store::ReviewStore;
use reviewdesk_sources::{AggregateReport, Aggregator};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Session review collection. Moderation and refresh take the write lock.
    pub store: Arc<RwLock<ReviewStore>>,
    /// Fetches and merges the review providers.
    pub aggregator: Arc<Aggregator>,
}

impl AppState {
    /// Build state with an empty store and an aggregator over the
    /// configured provider URLs.
    pub fn new(config: ServerConfig) -> Self {
        let aggregator = Aggregator::from_urls(
            &config.provider_a_url,
            &config.provider_b_url,
            config.source_timeout(),
        );
        Self::with_aggregator(config, aggregator)
    }

    pub fn with_aggregator(config: ServerConfig, aggregator: Aggregator) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(RwLock::new(ReviewStore::new())),
            aggregator: Arc::new(aggregator),
        }
    }

    /// Re-run the aggregator and replace the store contents.
    ///
    /// Any moderation decisions made since the last refresh are discarded,
    /// the same as reloading the dashboard.
    pub async fn refresh(&self) -> AggregateReport {
        let report = self.aggregator.fetch_all().await;
        let mut store = self.store.write().await;
        store.replace(report.reviews.clone());
        tracing::info!(
            total = store.len(),
            failed = report.failed_sources().count(),
            "Review store refreshed"
        );
        report
    }
}

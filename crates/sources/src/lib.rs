//! Review source fetchers and the aggregator that merges them.
//!
//! Each provider is reached over HTTP through [`ProviderClient`]; the
//! [`Aggregator`] fetches every provider concurrently, tolerates per-source
//! failures, and concatenates the successful results in source order.

pub mod aggregator;
pub mod client;

pub use aggregator::{AggregateReport, Aggregator, ReviewProvider, SourceOutcome, SourceSummary};
pub use client::{parse_envelope, ProviderClient, ProviderEnvelope, SourceError};

//! Canned provider payloads served by the mock provider endpoints.

use serde_json::{json, Value};

use reviewdesk_core::review::ReviewSource;

const PROVIDER_A_REVIEWS: &str = include_str!("../fixtures/provider_a.json");
const PROVIDER_B_REVIEWS: &str = include_str!("../fixtures/provider_b.json");

/// Raw record array for one provider, exactly as embedded.
pub fn records(source: ReviewSource) -> Result<Vec<Value>, serde_json::Error> {
    let raw = match source {
        ReviewSource::ProviderA => PROVIDER_A_REVIEWS,
        ReviewSource::ProviderB => PROVIDER_B_REVIEWS,
    };
    serde_json::from_str(raw)
}

/// Wrap records in the envelope the provider itself would return.
///
/// The places provider also reports its own name and a record count.
pub fn envelope(source: ReviewSource, records: Vec<Value>) -> Value {
    match source {
        ReviewSource::ProviderA => json!({
            "status": "success",
            "result": records,
        }),
        ReviewSource::ProviderB => json!({
            "status": "success",
            "total": records.len(),
            "source": source.as_str(),
            "result": records,
        }),
    }
}

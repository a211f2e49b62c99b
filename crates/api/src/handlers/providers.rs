//! Mock provider endpoints. They stand in for the external review APIs
//! during local development and answer with the providers' own envelopes,
//! not the `{ "data": ... }` wrapper used elsewhere.

use axum::Json;
use serde_json::Value;

use reviewdesk_core::review::ReviewSource;

use crate::error::{AppError, AppResult};
use crate::fixtures;

/// GET /api/v1/providers/provider-a/reviews
pub async fn provider_a_reviews() -> AppResult<Json<Value>> {
    serve(ReviewSource::ProviderA)
}

/// GET /api/v1/providers/provider-b/reviews
pub async fn provider_b_reviews() -> AppResult<Json<Value>> {
    serve(ReviewSource::ProviderB)
}

fn serve(source: ReviewSource) -> AppResult<Json<Value>> {
    let records = fixtures::records(source).map_err(|e| {
        AppError::InternalError(format!("Fixture for {source} is not valid JSON: {e}"))
    })?;
    tracing::debug!(%source, count = records.len(), "Serving mock provider reviews");
    Ok(Json(fixtures::envelope(source, records)))
}

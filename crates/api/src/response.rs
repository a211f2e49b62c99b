//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Use [`DataResponse`]
//! instead of ad-hoc `serde_json::json!({ "data": ... })`.

use serde::Serialize;

use reviewdesk_core::pagination::Page;
use reviewdesk_core::review::Review;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// A page of reviews plus the unfiltered store size, so the dashboard can
/// show "N of M reviews".
#[derive(Debug, Serialize)]
pub struct ReviewPage {
    #[serde(flatten)]
    pub page: Page<Review>,
    pub total_reviews: usize,
}

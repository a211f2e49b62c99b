pub mod health;
pub mod providers;
pub mod public;
pub mod reviews;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /providers/provider-a/reviews             mock property-management provider (GET)
/// /providers/provider-b/reviews             mock places provider (GET)
///
/// /reviews                                  filtered, sorted, paginated list (GET)
/// /reviews/stats                            statistics of the filtered subset (GET)
/// /reviews/options                          listing and category options (GET)
/// /reviews/refresh                          re-fetch every source (POST)
/// /reviews/{id}/approve                     approve (POST, optional ?source=)
/// /reviews/{id}/reject                      reject (POST, optional ?source=)
///
/// /public/properties                        per-property summaries (GET)
/// /public/properties/{listing_name}         one property's summary (GET)
/// /public/reviews                           approved reviews (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/providers", providers::router())
        .nest("/reviews", reviews::router())
        .nest("/public", public::router())
}

use axum::routing::get;
use axum::Router;

use crate::handlers::providers;
use crate::state::AppState;

/// Mock provider routes, nested under `/providers`.
///
/// ```text
/// GET    /provider-a/reviews    provider_a_reviews
/// GET    /provider-b/reviews    provider_b_reviews
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/provider-a/reviews", get(providers::provider_a_reviews))
        .route("/provider-b/reviews", get(providers::provider_b_reviews))
}

//! Route definitions for the manager dashboard.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::reviews;
use crate::state::AppState;

/// Dashboard routes, nested under `/reviews`.
///
/// ```text
/// GET    /                  list_reviews
/// GET    /stats             review_stats
/// GET    /options           filter_options
/// POST   /refresh           refresh_reviews
/// POST   /{id}/approve      approve_review
/// POST   /{id}/reject       reject_review
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reviews::list_reviews))
        .route("/stats", get(reviews::review_stats))
        .route("/options", get(reviews::filter_options))
        .route("/refresh", post(reviews::refresh_reviews))
        .route("/{id}/approve", post(reviews::approve_review))
        .route("/{id}/reject", post(reviews::reject_review))
}

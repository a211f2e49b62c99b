//! Handlers for the manager dashboard: filtered listing, statistics,
//! filter options, moderation and source refresh.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use reviewdesk_core::filter::filter_reviews;
use reviewdesk_core::lookup::{unique_categories, unique_listings};
use reviewdesk_core::pagination::Page;
use reviewdesk_core::review::Review;
use reviewdesk_core::sort::sort_reviews;
use reviewdesk_core::stats::{compute_stats, ReviewStats};
use reviewdesk_sources::SourceSummary;

use crate::error::AppResult;
use crate::query::{FilterParams, ModerationParams, ReviewListParams};
use crate::response::{DataResponse, ReviewPage};
use crate::state::AppState;

/// Values for the dashboard's filter dropdowns.
#[derive(Debug, Serialize)]
pub struct FilterOptions {
    pub listings: Vec<String>,
    pub categories: Vec<String>,
}

/// Outcome of re-running the aggregator.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub sources: Vec<SourceSummary>,
    pub total: usize,
}

/// GET /api/v1/reviews
///
/// Filter, sort and paginate the session reviews.
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(params): Query<ReviewListParams>,
) -> AppResult<Json<DataResponse<ReviewPage>>> {
    let filters = params.filters.to_filters()?;
    let ordering = params.order.resolve(state.config.page_size)?;

    let (mut matching, total_reviews) = {
        let store = state.store.read().await;
        (filter_reviews(store.all(), &filters), store.len())
    };
    sort_reviews(&mut matching, ordering.key, ordering.direction);

    let page = Page::from_slice(&matching, ordering.page, ordering.page_size);
    Ok(Json(DataResponse {
        data: ReviewPage {
            page,
            total_reviews,
        },
    }))
}

/// GET /api/v1/reviews/stats
///
/// Statistics over the reviews matching the same filters as the list.
pub async fn review_stats(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> AppResult<Json<DataResponse<ReviewStats>>> {
    let filters = params.to_filters()?;
    let store = state.store.read().await;
    let stats = compute_stats(&filter_reviews(store.all(), &filters));
    Ok(Json(DataResponse { data: stats }))
}

/// GET /api/v1/reviews/options
pub async fn filter_options(State(state): State<AppState>) -> Json<DataResponse<FilterOptions>> {
    let store = state.store.read().await;
    Json(DataResponse {
        data: FilterOptions {
            listings: unique_listings(store.all()),
            categories: unique_categories(store.all()),
        },
    })
}

/// POST /api/v1/reviews/{id}/approve
pub async fn approve_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ModerationParams>,
) -> AppResult<Json<DataResponse<Vec<Review>>>> {
    let source = params.source()?;
    let updated = state.store.write().await.approve(&id, source)?;

    tracing::info!(review_id = %id, count = updated.len(), "Review approved");
    Ok(Json(DataResponse { data: updated }))
}

/// POST /api/v1/reviews/{id}/reject
pub async fn reject_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ModerationParams>,
) -> AppResult<Json<DataResponse<Vec<Review>>>> {
    let source = params.source()?;
    let updated = state.store.write().await.reject(&id, source)?;

    tracing::info!(review_id = %id, count = updated.len(), "Review rejected");
    Ok(Json(DataResponse { data: updated }))
}

/// POST /api/v1/reviews/refresh
///
/// Re-fetch every source and replace the session reviews. Earlier
/// moderation decisions are lost.
pub async fn refresh_reviews(State(state): State<AppState>) -> Json<DataResponse<RefreshResponse>> {
    let report = state.refresh().await;
    Json(DataResponse {
        data: RefreshResponse {
            total: report.reviews.len(),
            sources: report.sources,
        },
    })
}

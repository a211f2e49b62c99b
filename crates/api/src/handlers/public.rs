//! Handlers for the public listing page. Only approved reviews are visible.

use axum::extract::{Path, Query, State};
use axum::Json;

use reviewdesk_core::error::CoreError;
use reviewdesk_core::lookup::{approved_only, property_summaries, property_summary, PropertySummary};
use reviewdesk_core::pagination::Page;
use reviewdesk_core::sort::sort_reviews;

use crate::error::AppResult;
use crate::query::PublicReviewParams;
use crate::response::{DataResponse, ReviewPage};
use crate::state::AppState;

/// GET /api/v1/public/properties
pub async fn list_properties(
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<PropertySummary>>> {
    let store = state.store.read().await;
    let summaries = property_summaries(&approved_only(store.all()));
    Json(DataResponse { data: summaries })
}

/// GET /api/v1/public/properties/{listing_name}
///
/// Summary for one listing (exact name). 404 when it has no approved reviews.
pub async fn get_property(
    State(state): State<AppState>,
    Path(listing_name): Path<String>,
) -> AppResult<Json<DataResponse<PropertySummary>>> {
    let store = state.store.read().await;
    let summary = property_summary(&approved_only(store.all()), &listing_name);
    if summary.total_reviews == 0 {
        return Err(CoreError::NotFound {
            entity: "Property",
            id: listing_name,
        }
        .into());
    }
    Ok(Json(DataResponse { data: summary }))
}

/// GET /api/v1/public/reviews
///
/// Approved reviews, optionally for one listing (exact name).
pub async fn list_public_reviews(
    State(state): State<AppState>,
    Query(params): Query<PublicReviewParams>,
) -> AppResult<Json<DataResponse<ReviewPage>>> {
    let ordering = params.order.resolve(state.config.page_size)?;
    let listing = params.listing.as_deref().filter(|l| !l.is_empty());

    let (mut visible, total_reviews) = {
        let store = state.store.read().await;
        let mut approved = approved_only(store.all());
        let total = approved.len();
        if let Some(listing) = listing {
            approved.retain(|r| r.listing_name == listing);
        }
        (approved, total)
    };
    sort_reviews(&mut visible, ordering.key, ordering.direction);

    Ok(Json(DataResponse {
        data: ReviewPage {
            page: Page::from_slice(&visible, ordering.page, ordering.page_size),
            total_reviews,
        },
    }))
}

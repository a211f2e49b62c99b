use axum::routing::get;
use axum::Router;

use crate::handlers::public;
use crate::state::AppState;

/// Public listing routes, nested under `/public`.
///
/// ```text
/// GET    /properties                   list_properties
/// GET    /properties/{listing_name}    get_property
/// GET    /reviews                      list_public_reviews
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/properties", get(public::list_properties))
        .route("/properties/{listing_name}", get(public::get_property))
        .route("/reviews", get(public::list_public_reviews))
}

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Reviews currently held in the session store.
    pub reviews_loaded: usize,
    /// Whether a refresh has completed. `false` with zero reviews means the
    /// initial load is still running, not that the sources are empty.
    pub loaded: bool,
}

/// GET /health -- returns service status and store size.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.store.read().await;

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        reviews_loaded: store.len(),
        loaded: store.is_loaded(),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

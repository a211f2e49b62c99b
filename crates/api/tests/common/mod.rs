#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use reviewdesk_api::config::{local_provider_url, ServerConfig};
use reviewdesk_api::fixtures;
use reviewdesk_api::router::build_app_router;
use reviewdesk_api::state::AppState;
use reviewdesk_core::review::{Review, ReviewSource};
use reviewdesk_sources::aggregator::merge;
use reviewdesk_sources::{parse_envelope, Aggregator, SourceOutcome};

/// Build a test `ServerConfig` with safe defaults.
///
/// Provider URLs point at port 0 and are only meaningful for tests that
/// replace them with a live address.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        provider_a_url: local_provider_url(0, "provider-a"),
        provider_b_url: local_provider_url(0, "provider-b"),
        source_timeout_secs: 5,
        page_size: 5,
    }
}

/// Both embedded provider payloads, merged and tagged the way a refresh
/// would produce them (5 provider-a records, then 3 provider-b records).
pub fn fixture_reviews() -> Vec<Review> {
    let outcomes = ReviewSource::ALL
        .into_iter()
        .map(|source| {
            let body = fixtures::envelope(source, fixtures::records(source).unwrap());
            SourceOutcome {
                source,
                result: parse_envelope(&serde_json::to_vec(&body).unwrap()),
            }
        })
        .collect();
    merge(outcomes).reviews
}

/// Build the full application router over a store preloaded with
/// [`fixture_reviews`]. The aggregator has no providers.
pub async fn build_test_app() -> (Router, AppState) {
    let config = test_config();
    let state = AppState::with_aggregator(config.clone(), Aggregator::new(Duration::from_secs(1)));
    state.store.write().await.replace(fixture_reviews());
    (build_app_router(state.clone(), &config), state)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri).await
}

pub async fn post(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri).await
}

async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Ids of the `items` array of a page response, rendered as strings.
pub fn item_ids(json: &Value) -> Vec<String> {
    json["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| match &item["id"] {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect()
}

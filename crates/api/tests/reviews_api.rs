//! Integration tests for the dashboard endpoints under `/api/v1/reviews`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, item_ids, post};

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_defaults_to_newest_first_first_page() {
    let (app, _) = common::build_test_app().await;
    let json = body_json(get(app, "/api/v1/reviews").await).await;

    let data = &json["data"];
    assert_eq!(data["page"], 1);
    assert_eq!(data["page_size"], 5);
    assert_eq!(data["total_items"], 8);
    assert_eq!(data["total_pages"], 2);
    assert_eq!(data["total_reviews"], 8);
    assert_eq!(
        item_ids(&json),
        ["places_1", "places_2", "places_3", "7457", "7456"]
    );
}

#[tokio::test]
async fn second_page_holds_the_remainder() {
    let (app, _) = common::build_test_app().await;
    let json = body_json(get(app, "/api/v1/reviews?page=2").await).await;

    assert_eq!(item_ids(&json), ["7455", "7454", "7453"]);
}

#[tokio::test]
async fn page_past_the_end_is_empty() {
    let (app, _) = common::build_test_app().await;
    let json = body_json(get(app, "/api/v1/reviews?page=9").await).await;

    assert!(item_ids(&json).is_empty());
    assert_eq!(json["data"]["total_items"], 8);
}

#[tokio::test]
async fn minimum_rating_keeps_unrated_reviews() {
    let (app, _) = common::build_test_app().await;
    let json = body_json(get(app, "/api/v1/reviews?rating=4.5&page_size=10").await).await;

    let mut ids = item_ids(&json);
    ids.sort();
    assert_eq!(ids, ["7453", "7454", "7456", "places_1"]);
    assert_eq!(json["data"]["total_reviews"], 8);
}

#[tokio::test]
async fn filters_by_source_and_approval() {
    let (app, _) = common::build_test_app().await;

    let json = body_json(get(app.clone(), "/api/v1/reviews?source=provider-b").await).await;
    assert_eq!(json["data"]["total_items"], 3);

    let json = body_json(get(app.clone(), "/api/v1/reviews?source=all").await).await;
    assert_eq!(json["data"]["total_items"], 8);

    let json = body_json(get(app.clone(), "/api/v1/reviews?approved=true").await).await;
    assert_eq!(item_ids(&json), ["places_1", "places_2"]);

    // Undecided provider-a reviews match neither value.
    let json = body_json(get(app, "/api/v1/reviews?approved=false").await).await;
    assert_eq!(item_ids(&json), ["places_3"]);
}

#[tokio::test]
async fn text_filters_are_case_insensitive_substrings() {
    let (app, _) = common::build_test_app().await;

    let json = body_json(
        get(app.clone(), "/api/v1/reviews?listing_name=SHOREDITCH&page_size=10").await,
    )
    .await;
    assert_eq!(json["data"]["total_items"], 4);

    let json = body_json(get(app, "/api/v1/reviews?category=Maint").await).await;
    assert_eq!(item_ids(&json), ["7455"]);
}

#[tokio::test]
async fn filters_by_type_and_date_range() {
    let (app, _) = common::build_test_app().await;

    let json = body_json(get(app.clone(), "/api/v1/reviews?type=host-to-guest").await).await;
    assert_eq!(item_ids(&json), ["7453"]);

    let json = body_json(
        get(app, "/api/v1/reviews?start=2024-01-01&end=2024-01-12%2000:00:00").await,
    )
    .await;
    assert_eq!(item_ids(&json), ["places_2", "places_3"]);
}

#[tokio::test]
async fn inverted_date_range_returns_empty_page() {
    let (app, _) = common::build_test_app().await;
    let response = get(app, "/api/v1/reviews?start=2024-02-01&end=2024-01-01").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(item_ids(&json).is_empty());
    assert_eq!(json["data"]["total_items"], 0);
    assert_eq!(json["data"]["total_reviews"], 8);
}

#[tokio::test]
async fn sorts_by_rating_and_property() {
    let (app, _) = common::build_test_app().await;

    let json = body_json(
        get(app.clone(), "/api/v1/reviews?sort_by=rating&order=asc&page_size=10").await,
    )
    .await;
    // Unrated sorts as zero.
    assert_eq!(item_ids(&json)[0], "7453");
    // Equal ratings keep source order.
    assert_eq!(item_ids(&json)[1..3], ["7455", "places_3"]);
    assert_eq!(item_ids(&json)[7], "places_1");

    let json = body_json(
        get(app, "/api/v1/reviews?sort_by=property&order=asc&page_size=10").await,
    )
    .await;
    let first = &json["data"]["items"][0]["listingName"];
    assert_eq!(first, "1B N2 B - 15 Brick Lane");
}

#[tokio::test]
async fn invalid_query_values_return_400() {
    let (app, _) = common::build_test_app().await;

    for uri in [
        "/api/v1/reviews?sort_by=price",
        "/api/v1/reviews?order=sideways",
        "/api/v1/reviews?page=0",
        "/api/v1/reviews?page=-1",
        "/api/v1/reviews?page_size=101",
        "/api/v1/reviews?rating=five",
        "/api/v1/reviews?type=guest",
        "/api/v1/reviews?source=airbnb",
        "/api/v1/reviews?start=2024-01-01",
        "/api/v1/reviews?start=soon&end=2024-01-01",
    ] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR", "{uri}");
    }
}

// ---------------------------------------------------------------------------
// Stats and options
// ---------------------------------------------------------------------------

#[tokio::test]
async fn stats_cover_the_whole_store_without_filters() {
    let (app, _) = common::build_test_app().await;
    let json = body_json(get(app, "/api/v1/reviews/stats").await).await;

    let stats = &json["data"];
    assert_eq!(stats["totalReviews"], 8);
    assert_eq!(stats["averageRating"], 4.1);
    assert_eq!(stats["ratingDistribution"]["1"], 0);
    assert_eq!(stats["ratingDistribution"]["3"], 2);
    assert_eq!(stats["ratingDistribution"]["4"], 3);
    assert_eq!(stats["ratingDistribution"]["5"], 2);
    assert_eq!(stats["topIssues"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn stats_follow_filters() {
    let (app, _) = common::build_test_app().await;
    let json = body_json(get(app, "/api/v1/reviews/stats?source=provider-b").await).await;

    let stats = &json["data"];
    assert_eq!(stats["totalReviews"], 3);
    assert_eq!(stats["averageRating"], 4.0);
    assert_eq!(stats["categoryAverages"]["communication"].as_f64(), Some(14.0 / 3.0));
}

#[tokio::test]
async fn options_list_distinct_sorted_values() {
    let (app, _) = common::build_test_app().await;
    let json = body_json(get(app, "/api/v1/reviews/options").await).await;

    let listings = json["data"]["listings"].as_array().unwrap();
    assert_eq!(listings.len(), 5);
    assert_eq!(listings[0], "1B N2 B - 15 Brick Lane");

    let categories = json["data"]["categories"].as_array().unwrap();
    assert!(categories.iter().any(|c| c == "respect_house_rules"));
    assert_eq!(categories[0], "accuracy");
}

// ---------------------------------------------------------------------------
// Moderation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn approve_sets_flag_and_is_visible_to_filters() {
    let (app, _) = common::build_test_app().await;

    let response = post(app.clone(), "/api/v1/reviews/7454/approve").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["id"], 7454);
    assert_eq!(json["data"][0]["approved"], true);
    assert_eq!(json["data"][0]["source"], "provider-a");

    let json = body_json(get(app, "/api/v1/reviews?approved=true").await).await;
    assert_eq!(json["data"]["total_items"], 3);
}

#[tokio::test]
async fn reject_overrides_provider_approval() {
    let (app, state) = common::build_test_app().await;

    let response = post(app, "/api/v1/reviews/places_1/reject?source=provider-b").await;
    assert_eq!(response.status(), StatusCode::OK);

    let store = state.store.read().await;
    let review = store
        .all()
        .iter()
        .find(|r| r.id.matches("places_1"))
        .unwrap();
    assert_eq!(review.approved, Some(false));
}

#[tokio::test]
async fn moderating_unknown_review_returns_404() {
    let (app, _) = common::build_test_app().await;

    let response = post(app.clone(), "/api/v1/reviews/9999/approve").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    // Exists, but not in the requested source.
    let response = post(app, "/api/v1/reviews/7454/reject?source=provider-b").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn moderating_with_unknown_source_returns_400() {
    let (app, _) = common::build_test_app().await;
    let response = post(app, "/api/v1/reviews/7454/approve?source=yelp").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

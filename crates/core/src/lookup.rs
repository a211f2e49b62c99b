//! Derived lookups: filter dropdown options and per-property summaries for
//! the public listing page.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::review::{Review, ReviewType};
use crate::stats::average_rating;

/// Distinct listing names, sorted.
pub fn unique_listings(reviews: &[Review]) -> Vec<String> {
    reviews
        .iter()
        .map(|r| r.listing_name.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Distinct category names across all reviews, sorted.
pub fn unique_categories(reviews: &[Review]) -> Vec<String> {
    reviews
        .iter()
        .flat_map(|r| &r.review_category)
        .map(|c| c.category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Reviews an operator has explicitly approved, in input order.
pub fn approved_only(reviews: &[Review]) -> Vec<Review> {
    reviews.iter().filter(|r| r.is_approved()).cloned().collect()
}

/// Headline numbers for one property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySummary {
    pub listing_name: String,
    pub total_reviews: usize,
    /// Mean over rated reviews, one decimal place; 0 when none are rated.
    pub average_rating: f64,
    /// `guest-to-host` reviews.
    pub guest_reviews: usize,
    /// `host-to-guest` reviews.
    pub host_reviews: usize,
}

/// Summarize the reviews of a single listing (exact name match).
pub fn property_summary(reviews: &[Review], listing_name: &str) -> PropertySummary {
    let matching: Vec<&Review> = reviews
        .iter()
        .filter(|r| r.listing_name == listing_name)
        .collect();
    summarize(listing_name, &matching)
}

/// One summary per distinct listing, sorted by listing name.
pub fn property_summaries(reviews: &[Review]) -> Vec<PropertySummary> {
    let mut grouped: BTreeMap<&str, Vec<&Review>> = BTreeMap::new();
    for review in reviews {
        grouped
            .entry(review.listing_name.as_str())
            .or_default()
            .push(review);
    }

    grouped
        .into_iter()
        .map(|(name, group)| summarize(name, &group))
        .collect()
}

fn summarize(listing_name: &str, reviews: &[&Review]) -> PropertySummary {
    let count_type = |t: ReviewType| reviews.iter().filter(|r| r.review_type == t).count();
    PropertySummary {
        listing_name: listing_name.to_string(),
        total_reviews: reviews.len(),
        average_rating: average_rating(reviews.iter().copied()),
        guest_reviews: count_type(ReviewType::GuestToHost),
        host_reviews: count_type(ReviewType::HostToGuest),
    }
}

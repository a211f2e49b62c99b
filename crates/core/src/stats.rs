//! Review statistics for the dashboard summary cards.
//!
//! [`compute_stats`] is total over any input, including an empty one.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::review::Review;

/// Ratings at or below this value surface in `top_issues`.
pub const ISSUE_RATING_THRESHOLD: f64 = 3.0;

/// Maximum number of entries in `top_issues`.
pub const MAX_TOP_ISSUES: usize = 5;

/// Histogram buckets; a rating lands in bucket `floor(rating)`.
pub const RATING_BUCKETS: std::ops::RangeInclusive<u8> = 1..=5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub total_reviews: usize,
    /// Mean over rated reviews, one decimal place; 0 when none are rated.
    pub average_rating: f64,
    /// Keys 1 through 5, always present.
    pub rating_distribution: BTreeMap<u8, usize>,
    pub category_averages: BTreeMap<String, f64>,
    pub top_issues: Vec<String>,
}

/// Round to one decimal place, halves away from zero.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean overall rating over the rated reviews, rounded to one decimal.
pub fn average_rating<'a>(reviews: impl IntoIterator<Item = &'a Review>) -> f64 {
    let (sum, count) = reviews
        .into_iter()
        .filter_map(|r| r.rating)
        .fold((0.0, 0usize), |(sum, count), rating| (sum + rating, count + 1));

    if count == 0 {
        0.0
    } else {
        round_one_decimal(sum / count as f64)
    }
}

/// Count rated reviews per integer bucket 1..=5.
///
/// Ratings whose floor falls outside 1..=5 (a 10-point scale, or anything
/// below 1) are not counted in any bucket.
pub fn rating_distribution(reviews: &[Review]) -> BTreeMap<u8, usize> {
    let mut buckets: BTreeMap<u8, usize> = RATING_BUCKETS.map(|b| (b, 0)).collect();
    let (low, high) = (f64::from(*RATING_BUCKETS.start()), f64::from(*RATING_BUCKETS.end()));
    for rating in reviews.iter().filter_map(|r| r.rating) {
        let floored = rating.floor();
        if (low..=high).contains(&floored) {
            *buckets.entry(floored as u8).or_insert(0) += 1;
        }
    }
    buckets
}

/// Mean rating per category name across every review that rates it.
pub fn category_averages(reviews: &[Review]) -> BTreeMap<String, f64> {
    let mut totals: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for cat in reviews.iter().flat_map(|r| &r.review_category) {
        let entry = totals.entry(cat.category.as_str()).or_insert((0.0, 0));
        entry.0 += cat.rating;
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(name, (sum, count))| (name.to_string(), sum / count as f64))
        .collect()
}

/// Review texts of the first [`MAX_TOP_ISSUES`] rated reviews at or below
/// [`ISSUE_RATING_THRESHOLD`], in input order.
pub fn top_issues(reviews: &[Review]) -> Vec<String> {
    reviews
        .iter()
        .filter(|r| r.rating.is_some_and(|rating| rating <= ISSUE_RATING_THRESHOLD))
        .take(MAX_TOP_ISSUES)
        .map(|r| r.public_review.clone())
        .collect()
}

pub fn compute_stats(reviews: &[Review]) -> ReviewStats {
    ReviewStats {
        total_reviews: reviews.len(),
        average_rating: average_rating(reviews),
        rating_distribution: rating_distribution(reviews),
        category_averages: category_averages(reviews),
        top_issues: top_issues(reviews),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

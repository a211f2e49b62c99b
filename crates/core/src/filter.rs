//! Review filter engine.
//!
//! [`ReviewFilters`] is a sparse set of predicates. Each present field must
//! pass for a review to be kept; absent fields impose no constraint.
//! [`filter_reviews`] is a single stable pass over the input.

use serde::Serialize;

use crate::error::CoreError;
use crate::review::{Review, ReviewSource, ReviewType};
use crate::types::{parse_instant, Instant};

// ---------------------------------------------------------------------------
// Filter value types
// ---------------------------------------------------------------------------

/// Sentinel accepted by [`SourceFilter::parse`] meaning "any source".
pub const SOURCE_ALL: &str = "all";

/// Source constraint. [`SourceFilter::All`] never filters anything out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceFilter {
    All,
    Only(ReviewSource),
}

impl SourceFilter {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if raw == SOURCE_ALL {
            Ok(SourceFilter::All)
        } else {
            ReviewSource::parse(raw).map(SourceFilter::Only)
        }
    }

    fn admits(&self, source: Option<ReviewSource>) -> bool {
        match self {
            SourceFilter::All => true,
            SourceFilter::Only(wanted) => source == Some(*wanted),
        }
    }
}

/// Inclusive submission-time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: Instant,
    pub end: Instant,
}

impl DateRange {
    /// Parse both bounds with the same grammar as `submittedAt`.
    ///
    /// A start after the end is accepted and contains nothing.
    pub fn parse(start: &str, end: &str) -> Result<Self, CoreError> {
        let start = parse_instant(start).ok_or_else(|| {
            CoreError::Validation(format!("Invalid date range start '{start}'"))
        })?;
        let end = parse_instant(end)
            .ok_or_else(|| CoreError::Validation(format!("Invalid date range end '{end}'")))?;

        Ok(Self { start, end })
    }

    pub fn contains(&self, instant: Instant) -> bool {
        self.start <= instant && instant <= self.end
    }
}

// ---------------------------------------------------------------------------
// ReviewFilters
// ---------------------------------------------------------------------------

/// Optional predicates applied by [`filter_reviews`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewFilters {
    /// Inclusive minimum overall rating. Unrated reviews always pass.
    pub rating: Option<f64>,
    /// Case-insensitive substring of any category name.
    pub category: Option<String>,
    /// Case-insensitive substring of the listing name.
    pub listing_name: Option<String>,
    #[serde(rename = "type")]
    pub review_type: Option<ReviewType>,
    /// Exact match; reviews without a moderation decision match neither value.
    pub approved: Option<bool>,
    pub source: Option<SourceFilter>,
    pub date_range: Option<DateRange>,
}

impl ReviewFilters {
    /// Whether no field constrains anything.
    pub fn is_empty(&self) -> bool {
        self.rating.is_none()
            && non_empty(&self.category).is_none()
            && non_empty(&self.listing_name).is_none()
            && self.review_type.is_none()
            && self.approved.is_none()
            && matches!(self.source, None | Some(SourceFilter::All))
            && self.date_range.is_none()
    }

    /// Test a single review against every present predicate.
    pub fn matches(&self, review: &Review) -> bool {
        if let (Some(min), Some(rating)) = (self.rating, review.rating) {
            if rating < min {
                return false;
            }
        }

        if let Some(needle) = non_empty(&self.category) {
            let needle = needle.to_lowercase();
            let has_category = review
                .review_category
                .iter()
                .any(|c| c.category.to_lowercase().contains(&needle));
            if !has_category {
                return false;
            }
        }

        if let Some(needle) = non_empty(&self.listing_name) {
            if !review
                .listing_name
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }

        if let Some(range) = &self.date_range {
            // An unparseable timestamp is never inside a range.
            match review.submitted_instant() {
                Some(instant) if range.contains(instant) => {}
                _ => return false,
            }
        }

        if let Some(review_type) = self.review_type {
            if review.review_type != review_type {
                return false;
            }
        }

        if let Some(approved) = self.approved {
            if review.approved != Some(approved) {
                return false;
            }
        }

        if let Some(source) = &self.source {
            if !source.admits(review.source) {
                return false;
            }
        }

        true
    }
}

/// Empty strings come from blank form inputs and mean "no constraint".
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Return the reviews that pass `filters`, preserving input order.
pub fn filter_reviews(reviews: &[Review], filters: &ReviewFilters) -> Vec<Review> {
    if filters.is_empty() {
        return reviews.to_vec();
    }
    reviews
        .iter()
        .filter(|r| filters.matches(r))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{ids, review, with_categories, with_date, with_listing};
    use assert_matches::assert_matches;

    fn scenario() -> Vec<Review> {
        vec![
            with_categories(review(1, Some(5.0)), &[("cleanliness", 5.0)]),
            review(2, None),
            with_categories(review(3, Some(2.0)), &[("cleanliness", 3.0)]),
        ]
    }

    #[test]
    fn empty_filters_are_identity() {
        let reviews = scenario();
        assert!(ReviewFilters::default().is_empty());
        assert_eq!(filter_reviews(&reviews, &ReviewFilters::default()), reviews);
    }

    #[test]
    fn rating_floor_keeps_unrated_reviews() {
        let filters = ReviewFilters {
            rating: Some(4.0),
            ..Default::default()
        };
        assert_eq!(ids(&filter_reviews(&scenario(), &filters)), ["1", "2"]);
    }

    #[test]
    fn rating_floor_is_inclusive() {
        let filters = ReviewFilters {
            rating: Some(2.0),
            ..Default::default()
        };
        assert_eq!(ids(&filter_reviews(&scenario(), &filters)), ["1", "2", "3"]);
    }

    #[test]
    fn category_is_case_insensitive_substring() {
        let reviews = vec![
            with_categories(review(1, Some(4.0)), &[("Cleanliness", 4.0)]),
            with_categories(review(2, Some(4.0)), &[("check_in", 4.0)]),
            review(3, Some(4.0)),
        ];
        let filters = ReviewFilters {
            category: Some("CLEAN".into()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_reviews(&reviews, &filters)), ["1"]);
    }

    #[test]
    fn blank_text_filters_are_ignored() {
        let filters = ReviewFilters {
            category: Some(String::new()),
            listing_name: Some(String::new()),
            ..Default::default()
        };
        assert!(filters.is_empty());
        // Review 2 has no categories but is still kept.
        assert_eq!(ids(&filter_reviews(&scenario(), &filters)), ["1", "2", "3"]);
    }

    #[test]
    fn listing_name_is_case_insensitive_substring() {
        let reviews = vec![
            with_listing(review(1, None), "2B N1 A - 29 Shoreditch Heights"),
            with_listing(review(2, None), "1B Studio - 15 Brick Lane"),
        ];
        let filters = ReviewFilters {
            listing_name: Some("shoreditch".into()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_reviews(&reviews, &filters)), ["1"]);
    }

    #[test]
    fn date_range_bounds_are_inclusive() {
        let reviews = vec![
            with_date(review(1, None), "2020-08-21 22:45:14"),
            with_date(review(2, None), "2020-08-22 14:30:00"),
            with_date(review(3, None), "2020-08-23 09:15:30"),
            with_date(review(4, None), "not a date"),
        ];
        let filters = ReviewFilters {
            date_range: Some(DateRange::parse("2020-08-21 22:45:14", "2020-08-22 14:30:00").unwrap()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_reviews(&reviews, &filters)), ["1", "2"]);
    }

    #[test]
    fn date_range_rejects_unparseable_bounds() {
        assert_matches!(DateRange::parse("nope", "2020-01-01"), Err(CoreError::Validation(_)));
        assert_matches!(DateRange::parse("2020-01-01", ""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn inverted_date_range_matches_nothing() {
        let range = DateRange::parse("2024-02-01", "2024-01-01").unwrap();
        let reviews = vec![
            with_date(review(1, None), "2024-01-15 14:30:00"),
            with_date(review(2, None), "2024-02-01 00:00:00"),
            with_date(review(3, None), "2024-01-01 00:00:00"),
        ];
        let filters = ReviewFilters {
            date_range: Some(range),
            ..Default::default()
        };
        assert!(filter_reviews(&reviews, &filters).is_empty());
    }

    #[test]
    fn type_is_exact() {
        let mut host = review(1, None);
        host.review_type = ReviewType::HostToGuest;
        let reviews = vec![host, review(2, None)];
        let filters = ReviewFilters {
            review_type: Some(ReviewType::HostToGuest),
            ..Default::default()
        };
        assert_eq!(ids(&filter_reviews(&reviews, &filters)), ["1"]);
    }

    #[test]
    fn undecided_reviews_match_neither_approval_value() {
        let mut yes = review(1, None);
        yes.approved = Some(true);
        let mut no = review(2, None);
        no.approved = Some(false);
        let reviews = vec![yes, no, review(3, None)];

        let approved = ReviewFilters {
            approved: Some(true),
            ..Default::default()
        };
        let rejected = ReviewFilters {
            approved: Some(false),
            ..Default::default()
        };
        assert_eq!(ids(&filter_reviews(&reviews, &approved)), ["1"]);
        assert_eq!(ids(&filter_reviews(&reviews, &rejected)), ["2"]);
    }

    #[test]
    fn source_all_sentinel_filters_nothing() {
        let mut b = review(2, None);
        b.source = Some(ReviewSource::ProviderB);
        let reviews = vec![review(1, None), b];

        let all = ReviewFilters {
            source: Some(SourceFilter::parse("all").unwrap()),
            ..Default::default()
        };
        assert!(all.is_empty());
        assert_eq!(ids(&filter_reviews(&reviews, &all)), ["1", "2"]);

        let only_b = ReviewFilters {
            source: Some(SourceFilter::parse("provider-b").unwrap()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_reviews(&reviews, &only_b)), ["2"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let reviews = scenario();
        let filters = ReviewFilters {
            rating: Some(3.0),
            category: Some("clean".into()),
            ..Default::default()
        };
        let once = filter_reviews(&reviews, &filters);
        let twice = filter_reviews(&once, &filters);
        assert_eq!(once, twice);
        assert_eq!(ids(&once), ["1"]);
    }
}

//! Review ordering.
//!
//! All sorts are stable: reviews with equal keys keep their relative order,
//! so repeated page requests over unchanged data see the same sequence.

use std::cmp::Ordering;

use feruca::Collator;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::review::Review;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Parsed submission instant.
    #[default]
    Date,
    /// Overall rating, unrated counted as 0.
    Rating,
    /// Listing name.
    Property,
}

impl SortKey {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        match raw {
            "date" => Ok(SortKey::Date),
            "rating" => Ok(SortKey::Rating),
            "property" => Ok(SortKey::Property),
            other => Err(CoreError::Validation(format!(
                "Invalid sort key '{other}'. Must be one of: date, rating, property"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        match raw {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(CoreError::Validation(format!(
                "Invalid sort order '{other}'. Must be one of: asc, desc"
            ))),
        }
    }
}

/// Ascending comparison of two reviews on one key.
///
/// Holds its own collator so a whole sort reuses one instance.
pub struct ReviewComparator {
    key: SortKey,
    collator: Collator,
}

impl ReviewComparator {
    pub fn new(key: SortKey) -> Self {
        Self {
            key,
            collator: Collator::default(),
        }
    }

    pub fn compare(&mut self, a: &Review, b: &Review) -> Ordering {
        match self.key {
            // Unparseable timestamps (None) order before every real instant.
            SortKey::Date => a.submitted_instant().cmp(&b.submitted_instant()),
            SortKey::Rating => a
                .rating
                .unwrap_or(0.0)
                .total_cmp(&b.rating.unwrap_or(0.0)),
            SortKey::Property => self.collate(&a.listing_name, &b.listing_name),
        }
    }

    /// Unicode collation (CLDR root order: accents and case are secondary
    /// to the base letter, lowercase first), then exact order so distinct
    /// strings never compare equal.
    pub fn collate(&mut self, a: &str, b: &str) -> Ordering {
        self.collator.collate(a, b).then_with(|| a.cmp(b))
    }
}

/// Sort `reviews` in place. Descending is the reversed ascending comparator.
pub fn sort_reviews(reviews: &mut [Review], key: SortKey, direction: SortDirection) {
    let mut comparator = ReviewComparator::new(key);
    match direction {
        SortDirection::Asc => reviews.sort_by(|a, b| comparator.compare(a, b)),
        SortDirection::Desc => reviews.sort_by(|a, b| comparator.compare(a, b).reverse()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

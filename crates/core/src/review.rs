//! Review record model shared by the providers, the store, and the API.
//!
//! Field names serialize in camelCase to match the provider payloads
//! (`publicReview`, `reviewCategory`, `submittedAt`, ...).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{parse_instant, Instant};

// ---------------------------------------------------------------------------
// Identifiers and tags
// ---------------------------------------------------------------------------

/// Provider-assigned review identifier.
///
/// Unique within one source only; the property-management provider uses
/// numbers, the places provider uses strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReviewId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewId::Number(n) => write!(f, "{n}"),
            ReviewId::Text(s) => f.write_str(s),
        }
    }
}

impl ReviewId {
    /// Whether this id renders as `raw`. Used to address reviews from a
    /// URL path segment, where the numeric/text distinction is lost.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            ReviewId::Number(n) => raw.parse::<i64>().is_ok_and(|r| r == *n),
            ReviewId::Text(s) => s == raw,
        }
    }
}

/// Direction of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewType {
    HostToGuest,
    GuestToHost,
}

impl ReviewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewType::HostToGuest => "host-to-guest",
            ReviewType::GuestToHost => "guest-to-host",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        match raw {
            "host-to-guest" => Ok(ReviewType::HostToGuest),
            "guest-to-host" => Ok(ReviewType::GuestToHost),
            other => Err(CoreError::Validation(format!(
                "Invalid review type '{other}'. Must be one of: host-to-guest, guest-to-host"
            ))),
        }
    }
}

/// Publication status reported by the provider. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Published,
    Pending,
    Rejected,
}

/// Which provider a review came from.
///
/// `ProviderA` is the property-management API, `ProviderB` the
/// maps/places API. The order of the variants is the merge order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReviewSource {
    #[serde(rename = "provider-a")]
    ProviderA,
    #[serde(rename = "provider-b")]
    ProviderB,
}

impl ReviewSource {
    pub const ALL: [ReviewSource; 2] = [ReviewSource::ProviderA, ReviewSource::ProviderB];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewSource::ProviderA => "provider-a",
            ReviewSource::ProviderB => "provider-b",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        match raw {
            "provider-a" => Ok(ReviewSource::ProviderA),
            "provider-b" => Ok(ReviewSource::ProviderB),
            other => Err(CoreError::Validation(format!(
                "Invalid source '{other}'. Must be one of: provider-a, provider-b"
            ))),
        }
    }
}

impl fmt::Display for ReviewSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Review
// ---------------------------------------------------------------------------

/// A named sub-rating such as `cleanliness`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRating {
    pub category: String,
    pub rating: f64,
}

/// One guest/host review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    #[serde(rename = "type")]
    pub review_type: ReviewType,
    pub status: ReviewStatus,
    /// Overall rating; `None` when the reviewer gave none.
    pub rating: Option<f64>,
    pub public_review: String,
    #[serde(default)]
    pub review_category: Vec<CategoryRating>,
    pub submitted_at: String,
    pub guest_name: String,
    pub listing_name: String,
    /// Moderation flag. `None` until an operator decides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
    /// Assigned by the aggregator; whatever the payload carries is ignored.
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub source: Option<ReviewSource>,
}

impl Review {
    /// Parsed `submitted_at`, or `None` if it does not parse.
    pub fn submitted_instant(&self) -> Option<Instant> {
        parse_instant(&self.submitted_at)
    }

    /// Check the rating invariants: overall and category ratings are finite
    /// and non-negative.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(rating) = self.rating {
            if !rating.is_finite() || rating < 0.0 {
                return Err(CoreError::Validation(format!(
                    "Review {} has invalid rating {rating}",
                    self.id
                )));
            }
        }

        for cat in &self.review_category {
            if !cat.rating.is_finite() || cat.rating < 0.0 {
                return Err(CoreError::Validation(format!(
                    "Review {} has invalid '{}' rating {}",
                    self.id, cat.category, cat.rating
                )));
            }
        }

        Ok(())
    }

    /// Attach the provider tag.
    pub fn with_source(mut self, source: ReviewSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn is_approved(&self) -> bool {
        self.approved == Some(true)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

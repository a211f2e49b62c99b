//! Shared query parameter types for API handlers.
//!
//! Raw query strings are deserialized into the `*Params` structs below and
//! then converted into core types, so every malformed value surfaces as a
//! [`CoreError::Validation`] (400) instead of an extractor rejection.

use serde::Deserialize;

use reviewdesk_core::error::CoreError;
use reviewdesk_core::filter::{DateRange, ReviewFilters, SourceFilter};
use reviewdesk_core::pagination::validate_page_size;
use reviewdesk_core::review::{ReviewSource, ReviewType};
use reviewdesk_core::sort::{SortDirection, SortKey};

/// Filter parameters shared by the dashboard list and stats endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub rating: Option<String>,
    pub category: Option<String>,
    pub listing_name: Option<String>,
    #[serde(rename = "type")]
    pub review_type: Option<String>,
    pub approved: Option<String>,
    pub source: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl FilterParams {
    pub fn to_filters(&self) -> Result<ReviewFilters, CoreError> {
        let rating = match present(&self.rating) {
            Some(raw) => Some(parse_rating(raw)?),
            None => None,
        };

        let review_type = present(&self.review_type)
            .map(ReviewType::parse)
            .transpose()?;

        let approved = match present(&self.approved) {
            Some("true") => Some(true),
            Some("false") => Some(false),
            Some(other) => {
                return Err(CoreError::Validation(format!(
                    "approved must be 'true' or 'false', got '{other}'"
                )))
            }
            None => None,
        };

        let source = present(&self.source)
            .map(SourceFilter::parse)
            .transpose()?;

        let date_range = match (present(&self.start), present(&self.end)) {
            (Some(start), Some(end)) => Some(DateRange::parse(start, end)?),
            (None, None) => None,
            _ => {
                return Err(CoreError::Validation(
                    "start and end must be given together".to_string(),
                ))
            }
        };

        Ok(ReviewFilters {
            rating,
            category: self.category.clone(),
            listing_name: self.listing_name.clone(),
            review_type,
            approved,
            source,
            date_range,
        })
    }
}

/// Sort and page parameters (`?sort_by=&order=&page=&page_size=`).
#[derive(Debug, Default, Deserialize)]
pub struct OrderParams {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

/// Validated form of [`OrderParams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ordering {
    pub key: SortKey,
    pub direction: SortDirection,
    pub page: usize,
    pub page_size: usize,
}

impl OrderParams {
    /// Resolve against the configured default page size.
    pub fn resolve(&self, default_page_size: usize) -> Result<Ordering, CoreError> {
        let key = present(&self.sort_by)
            .map(SortKey::parse)
            .transpose()?
            .unwrap_or_default();
        let direction = present(&self.order)
            .map(SortDirection::parse)
            .transpose()?
            .unwrap_or_default();

        let page = match present(&self.page) {
            Some(raw) => parse_count("page", raw)?,
            None => 1,
        };
        if page == 0 {
            return Err(CoreError::Validation("page must be at least 1".to_string()));
        }

        let page_size = match present(&self.page_size) {
            Some(raw) => parse_count("page_size", raw)?,
            None => default_page_size,
        };
        validate_page_size(page_size)?;

        Ok(Ordering {
            key,
            direction,
            page,
            page_size,
        })
    }
}

/// `GET /reviews` query: filters plus ordering.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewListParams {
    #[serde(flatten)]
    pub filters: FilterParams,
    #[serde(flatten)]
    pub order: OrderParams,
}

/// `?source=` on the moderation endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ModerationParams {
    pub source: Option<String>,
}

impl ModerationParams {
    pub fn source(&self) -> Result<Option<ReviewSource>, CoreError> {
        present(&self.source).map(ReviewSource::parse).transpose()
    }
}

/// `GET /public/reviews` query.
#[derive(Debug, Default, Deserialize)]
pub struct PublicReviewParams {
    pub listing: Option<String>,
    #[serde(flatten)]
    pub order: OrderParams,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Treat blank query values as absent.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_rating(raw: &str) -> Result<f64, CoreError> {
    raw.parse::<f64>()
        .ok()
        .filter(|r| r.is_finite())
        .ok_or_else(|| CoreError::Validation(format!("rating must be a number, got '{raw}'")))
}

fn parse_count(name: &str, raw: &str) -> Result<usize, CoreError> {
    raw.parse::<usize>().map_err(|_| {
        CoreError::Validation(format!("{name} must be a non-negative integer, got '{raw}'"))
    })
}

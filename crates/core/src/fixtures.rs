//! Review builders shared by the unit tests.

use crate::review::{CategoryRating, Review, ReviewId, ReviewSource, ReviewStatus, ReviewType};

pub fn review(id: i64, rating: Option<f64>) -> Review {
    Review {
        id: ReviewId::Number(id),
        review_type: ReviewType::GuestToHost,
        status: ReviewStatus::Published,
        rating,
        public_review: format!("review {id}"),
        review_category: Vec::new(),
        submitted_at: "2024-01-01 12:00:00".to_string(),
        guest_name: "Guest".to_string(),
        listing_name: "Listing".to_string(),
        approved: None,
        source: Some(ReviewSource::ProviderA),
    }
}

pub fn with_categories(mut review: Review, cats: &[(&str, f64)]) -> Review {
    review.review_category = cats
        .iter()
        .map(|(category, rating)| CategoryRating {
            category: category.to_string(),
            rating: *rating,
        })
        .collect();
    review
}

pub fn with_listing(mut review: Review, listing: &str) -> Review {
    review.listing_name = listing.to_string();
    review
}

pub fn with_date(mut review: Review, submitted_at: &str) -> Review {
    review.submitted_at = submitted_at.to_string();
    review
}

pub fn ids(reviews: &[Review]) -> Vec<String> {
    reviews.iter().map(|r| r.id.to_string()).collect()
}

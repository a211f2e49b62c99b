//! Session-scoped review collection.
//!
//! [`ReviewStore`] owns the merged reviews for the current session. It is
//! replaced wholesale on every refresh and otherwise only changes through
//! the moderation operations. Callers that share it across tasks wrap it
//! in a lock; the store itself assumes a single writer.

use crate::error::CoreError;
use crate::review::{Review, ReviewSource};

#[derive(Debug, Clone, Default)]
pub struct ReviewStore {
    reviews: Vec<Review>,
    loaded: bool,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection with a freshly aggregated one.
    pub fn replace(&mut self, reviews: Vec<Review>) {
        self.reviews = reviews;
        self.loaded = true;
    }

    pub fn all(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Whether [`replace`](Self::replace) has run at least once.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Set the moderation flag on every review whose id renders as `id`,
    /// optionally restricted to one source (ids are only unique per source).
    ///
    /// Returns the updated reviews, or [`CoreError::NotFound`] if nothing
    /// matched.
    pub fn set_approval(
        &mut self,
        id: &str,
        source: Option<ReviewSource>,
        approved: bool,
    ) -> Result<Vec<Review>, CoreError> {
        let updated: Vec<Review> = self
            .reviews
            .iter_mut()
            .filter(|r| r.id.matches(id) && source.is_none_or(|s| r.source == Some(s)))
            .map(|r| {
                r.approved = Some(approved);
                r.clone()
            })
            .collect();

        if updated.is_empty() {
            return Err(CoreError::NotFound {
                entity: "Review",
                id: id.to_string(),
            });
        }
        Ok(updated)
    }

    pub fn approve(
        &mut self,
        id: &str,
        source: Option<ReviewSource>,
    ) -> Result<Vec<Review>, CoreError> {
        self.set_approval(id, source, true)
    }

    pub fn reject(
        &mut self,
        id: &str,
        source: Option<ReviewSource>,
    ) -> Result<Vec<Review>, CoreError> {
        self.set_approval(id, source, false)
    }
}

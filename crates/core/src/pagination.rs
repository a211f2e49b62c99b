//! Page slicing over an already ordered sequence.
//!
//! Pages are 1-indexed. Page `k` covers `[(k-1)*size, k*size)`; anything
//! past the end is an empty page, never an error.

use serde::Serialize;

use crate::error::CoreError;

/// Page size used by the dashboard and the public listing page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: usize = 100;

/// Number of pages needed for `total` items, i.e. `ceil(total / page_size)`.
/// Zero when `page_size` is zero.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Slice one page out of `items`.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let Some(start) = (page - 1).checked_mul(page_size) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Validate a requested page size against [`MAX_PAGE_SIZE`].
pub fn validate_page_size(page_size: usize) -> Result<(), CoreError> {
    if page_size == 0 || page_size > MAX_PAGE_SIZE {
        return Err(CoreError::Validation(format!(
            "page_size must be between 1 and {MAX_PAGE_SIZE}"
        )));
    }
    Ok(())
}

/// One page of results plus the counts a pager needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T: Serialize> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    /// Items across all pages.
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T: Serialize + Clone> Page<T> {
    pub fn from_slice(items: &[T], page: usize, page_size: usize) -> Self {
        Self {
            items: paginate(items, page, page_size).to_vec(),
            page,
            page_size,
            total_items: items.len(),
            total_pages: total_pages(items.len(), page_size),
        }
    }
}

//! Review dashboard domain logic.
//!
//! The `core` crate has no I/O: the review model, the filter engine,
//! sort/paginate helpers, statistics, and the in-memory review store all
//! operate on data passed in by the caller.

pub mod error;
pub mod filter;
pub mod lookup;
pub mod pagination;
pub mod review;
pub mod sort;
pub mod stats;
pub mod store;
pub mod types;

#[cfg(test)]
mod fixtures;

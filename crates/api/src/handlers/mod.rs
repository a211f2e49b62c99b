pub mod providers;
pub mod public;
pub mod reviews;

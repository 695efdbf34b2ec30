//! Reports module for the expense tracker
//!
//! Summaries built on top of the store's aggregate queries.

pub mod category_summary;

pub use category_summary::{CategorySummary, CategorySummaryRow};

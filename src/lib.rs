//! Expense Tracker - session-scoped terminal expense tracking
//!
//! This library provides the core of a small expense tracker: an in-memory
//! list of expense records that can be added, edited, deleted, sorted by date
//! and filtered by date range, with running totals and per-category summaries.
//! Records live only as long as the session that created them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense records and their value types
//! - `store`: The in-memory expense store
//! - `reports`: Category summary
//! - `display`: Terminal formatting
//! - `cli`: Interactive session commands
//!
//! # Example
//!
//! ```rust
//! use expense_tracker::models::Expense;
//! use expense_tracker::store::ExpenseStore;
//!
//! let mut store = ExpenseStore::new();
//! store.add(Expense::from_input("Lunch", "12.50", "2024-01-02", "Food"));
//! store.add(Expense::from_input("Bus", "2.75", "2024-01-02", "Transport"));
//!
//! assert_eq!(store.total().value(), 15.25);
//! assert_eq!(store.category_totals().len(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod store;

pub use error::{ExpenseError, ExpenseResult};

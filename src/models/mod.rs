//! Core data models for the expense tracker
//!
//! Expense records and the value types they are built from.

pub mod amount;
pub mod date;
pub mod expense;
pub mod ids;

pub use amount::Amount;
pub use date::{parse_instant, ExpenseDate, Instant};
pub use expense::{Expense, ExpenseRecord};
pub use ids::ExpenseId;

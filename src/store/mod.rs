//! Session storage for expense records
//!
//! Everything lives in memory for the length of one session; nothing here
//! touches the disk.

pub mod expenses;
pub mod totals;

pub use expenses::{CommitOutcome, EditState, ExpenseStore, SortDirection};
pub use totals::{CategoryTotal, CategoryTotals};

//! Expense model
//!
//! An expense is a plain value record: whatever the user typed into the form,
//! after lenient number parsing. Nothing is validated.

use std::fmt;

use super::amount::Amount;
use super::date::ExpenseDate;
use super::ids::ExpenseId;

/// A single user-entered expense
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Expense {
    /// Label for the expense
    pub name: String,

    /// Amount as parsed from the input (may be NaN)
    pub amount: Amount,

    /// Date as entered
    pub date: ExpenseDate,

    /// Free-text grouping key, matched exactly
    pub category: String,
}

impl Expense {
    /// Create an expense from already-typed values
    pub fn new(
        name: impl Into<String>,
        amount: Amount,
        date: impl Into<ExpenseDate>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            date: date.into(),
            category: category.into(),
        }
    }

    /// Create an expense from raw form input
    ///
    /// The amount text goes through [`Amount::parse`], so unreadable input
    /// becomes NaN rather than an error.
    pub fn from_input(name: &str, amount: &str, date: &str, category: &str) -> Self {
        Self::new(name, Amount::parse(amount), date, category)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} [{}]",
            self.date, self.name, self.amount, self.category
        )
    }
}

/// An expense held by the store under its stable id
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    /// Identifier assigned when the expense was added
    pub id: ExpenseId,

    /// Current contents of the record
    pub expense: Expense,
}

impl ExpenseRecord {
    /// Create a record
    pub fn new(id: ExpenseId, expense: Expense) -> Self {
        Self { id, expense }
    }
}

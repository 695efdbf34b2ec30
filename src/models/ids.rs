//! Stable identifiers for expense records
//!
//! Ids are handed out by the store in increasing order and never reused within
//! a session, so a row reference stays valid while other rows are deleted or
//! the list is re-sorted.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

const DISPLAY_PREFIX: &str = "exp-";

/// Identifier of an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// Create an id from its raw sequence number
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The id following this one in the sequence
    pub(crate) const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    /// Accepts both the display form (`exp-3`) and the bare number (`3`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

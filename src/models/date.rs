//! Expense dates
//!
//! The date of an expense is kept as the text the user typed. It is only
//! turned into an instant when something needs to compare dates, and text
//! that doesn't read as a date simply has no instant.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use std::cmp::Ordering;
use std::fmt;

/// A point in time used for sorting and range filtering
pub type Instant = NaiveDateTime;

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse calendar text into an instant
///
/// Accepts `YYYY-MM-DD` (midnight), `YYYY-MM-DDTHH:MM[:SS[.fff]]` and RFC 3339
/// timestamps (normalized to UTC). Returns `None` for anything else,
/// including signed years such as `+2024-01-01`.
pub fn parse_instant(text: &str) -> Option<Instant> {
    let text = text.trim();

    // chrono's %Y takes an optional sign
    if text.starts_with(|c: char| c == '+' || c == '-') {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(instant) = NaiveDateTime::parse_from_str(text, format) {
            return Some(instant);
        }
    }

    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.naive_utc())
}

/// The date of an expense, as entered
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ExpenseDate(String);

impl ExpenseDate {
    /// Wrap the entered text
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The text as entered
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The parsed instant, or `None` if the text isn't a readable date
    pub fn instant(&self) -> Option<Instant> {
        parse_instant(&self.0)
    }

    /// Check if the text reads as a date
    pub fn is_valid(&self) -> bool {
        self.instant().is_some()
    }

    /// Check if the date falls within `[start, end]`, bounds included
    ///
    /// Unreadable dates are never in range.
    pub fn within(&self, start: Instant, end: Instant) -> bool {
        self.instant()
            .map(|instant| instant >= start && instant <= end)
            .unwrap_or(false)
    }
}

impl fmt::Display for ExpenseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ExpenseDate {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for ExpenseDate {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// Chronological ordering with unreadable dates after every readable one
///
/// Two unreadable dates compare equal, so a stable sort keeps them in their
/// existing relative order.
pub fn compare_chronological(a: Option<Instant>, b: Option<Instant>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

//! Amount type for expense values
//!
//! Amounts are kept exactly as the user's input parses, including the
//! not-a-number result of unreadable input. NaN is carried through arithmetic
//! untouched, so a single unreadable amount turns every total it takes part in
//! into NaN instead of failing the operation.

use std::fmt;
use std::ops::{Add, AddAssign};

/// A numeric expense amount
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a raw value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// The not-a-number amount produced by unreadable input
    pub const fn nan() -> Self {
        Self(f64::NAN)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is NaN
    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Parse an amount from user input
    ///
    /// Never fails. Leading whitespace is skipped and the longest leading
    /// decimal literal is used, so `"12.5kg"` reads as 12.5. Input with no
    /// numeric prefix at all reads as NaN.
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Amount;
    /// assert_eq!(Amount::parse("7.25").value(), 7.25);
    /// assert_eq!(Amount::parse(" 12abc").value(), 12.0);
    /// assert!(Amount::parse("twelve").is_nan());
    /// ```
    pub fn parse(s: &str) -> Self {
        let s = s.trim_start();
        let prefix = &s[..numeric_prefix_len(s)];

        let (sign, unsigned) = match prefix.as_bytes().first() {
            Some(b'-') => (-1.0, &prefix[1..]),
            Some(b'+') => (1.0, &prefix[1..]),
            _ => (1.0, prefix),
        };

        if unsigned == "Infinity" {
            return Self(sign * f64::INFINITY);
        }

        prefix.parse().map(Self).unwrap_or_else(|_| Self::nan())
    }

    /// Format with a fixed number of decimal places
    pub fn format_fixed(&self, places: usize) -> String {
        if self.0.is_nan() {
            "NaN".to_string()
        } else if self.0.is_infinite() {
            if self.0 > 0.0 {
                "Infinity".to_string()
            } else {
                "-Infinity".to_string()
            }
        } else {
            format!("{:.*}", places, self.0)
        }
    }
}

/// Length of the leading decimal literal in `s`, or 0 if there is none
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    if s[i..].starts_with("Infinity") {
        return i + "Infinity".len();
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        // A lone "." with no digits on either side is not a number
        if digits > 0 {
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    // Exponent only counts when at least one digit follows it
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_fixed(2))
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl<'a> std::iter::Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(Amount::parse("10.50").value(), 10.5);
        assert_eq!(Amount::parse("100").value(), 100.0);
        assert_eq!(Amount::parse("-3.5").value(), -3.5);
        assert_eq!(Amount::parse("+2").value(), 2.0);
        assert_eq!(Amount::parse(".5").value(), 0.5);
        assert_eq!(Amount::parse("5.").value(), 5.0);
        assert_eq!(Amount::parse("1e3").value(), 1000.0);
    }

    #[test]
    fn test_parse_uses_numeric_prefix() {
        assert_eq!(Amount::parse("  42 dollars").value(), 42.0);
        assert_eq!(Amount::parse("3.14.15").value(), 3.14);
        assert_eq!(Amount::parse("2e").value(), 2.0);
        assert_eq!(Amount::parse("2e+").value(), 2.0);
        assert_eq!(Amount::parse("7,50").value(), 7.0);
    }

    #[test]
    fn test_parse_unreadable_is_nan() {
        assert!(Amount::parse("").is_nan());
        assert!(Amount::parse("abc").is_nan());
        assert!(Amount::parse("$10").is_nan());
        assert!(Amount::parse(".").is_nan());
        assert!(Amount::parse("-").is_nan());
        assert!(Amount::parse("   ").is_nan());
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(Amount::parse("Infinity").value(), f64::INFINITY);
        assert_eq!(Amount::parse("-Infinityx").value(), f64::NEG_INFINITY);
        assert!(Amount::parse("inf").is_nan());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Amount::new(12.5)), "12.50");
        assert_eq!(format!("{}", Amount::zero()), "0.00");
        assert_eq!(format!("{}", Amount::new(-1.005)), "-1.00");
        assert_eq!(format!("{}", Amount::nan()), "NaN");
        assert_eq!(format!("{}", Amount::new(f64::INFINITY)), "Infinity");
    }

    #[test]
    fn test_sum() {
        let amounts = vec![Amount::new(12.5), Amount::new(7.25), Amount::new(100.0)];
        let total: Amount = amounts.iter().sum();
        assert_eq!(total.value(), 119.75);

        let empty: Vec<Amount> = Vec::new();
        assert!(empty.into_iter().sum::<Amount>().is_zero());
    }

    #[test]
    fn test_nan_poisons_sum() {
        let amounts = vec![Amount::new(1.0), Amount::nan(), Amount::new(2.0)];
        let total: Amount = amounts.into_iter().sum();
        assert!(total.is_nan());
    }
}

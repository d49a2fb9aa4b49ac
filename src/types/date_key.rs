//! This module defines the canonical, validated representation of a record date.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::LogSliceError;
use crate::search::date::{self, DATE_LEN};

/// A fixed-width `YYYY-MM-DD` date that has passed validation.
///
/// Ordering is byte-wise lexicographic over the text. Because the format is
/// zero-padded and fixed-width, this is the same as chronological order, which
/// is what lets the locator compare raw file bytes against `as_bytes()` without
/// parsing every probed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey {
    text: [u8; DATE_LEN],
    date: NaiveDate,
}

impl DateKey {
    /// Parses and validates a user-supplied date string.
    pub fn parse(text: &str) -> Result<Self, LogSliceError> {
        Self::from_bytes(text.as_bytes())
            .ok_or_else(|| LogSliceError::InvalidDate(text.to_string()))
    }

    /// Validates exactly `DATE_LEN` bytes taken from a buffer.
    /// Returns `None` for anything that is not a valid date.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let components = date::parse_components(bytes)?;
        if !date::validate_components(&components) {
            return None;
        }
        let date = NaiveDate::from_ymd_opt(components.year, components.month, components.day)?;
        let mut text = [0u8; DATE_LEN];
        text.copy_from_slice(bytes);
        Some(Self { text, date })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.text
    }

    pub fn as_str(&self) -> &str {
        // Validation only admits ASCII digits and dashes.
        std::str::from_utf8(&self.text).unwrap_or_default()
    }

    pub fn naive_date(&self) -> NaiveDate {
        self.date
    }
}

impl FromStr for DateKey {
    type Err = LogSliceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Provides the canonical `YYYY-MM-DD` representation.
impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_and_display() {
        let key = DateKey::parse("2024-02-29").unwrap();
        assert_eq!(key.to_string(), "2024-02-29");
        assert_eq!(key.as_bytes(), b"2024-02-29");
        assert_eq!(key.naive_date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_parse_invalid_reports_input() {
        match DateKey::parse("2024-02-30") {
            Err(LogSliceError::InvalidDate(text)) => assert_eq!(text, "2024-02-30"),
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a: DateKey = "2023-12-31".parse().unwrap();
        let b: DateKey = "2024-01-01".parse().unwrap();
        let c: DateKey = "2024-01-10".parse().unwrap();
        assert!(a < b && b < c);
        assert!(a.as_bytes() < b.as_bytes());
    }

    #[test]
    fn test_from_bytes_rejects_wrong_length() {
        assert!(DateKey::from_bytes(b"2024-01-0").is_none());
        assert!(DateKey::from_bytes(b"2024-01-011").is_none());
    }
}

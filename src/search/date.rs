//! This module contains the pure, stateless date validation used to gate user
//! input and to recognise dates inside the log buffer.
//!
//! Validation is total: malformed text yields `false`, never a panic or an error.

use crate::types::DateKey;

/// Width of the `YYYY-MM-DD` prefix every record starts with.
pub const DATE_LEN: usize = 10;

/// Supported year range. These are deliberate bounds, not calendar limits.
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// The numeric fields of a `YYYY-MM-DD` string, before range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateComponents {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

//==================================================================================
// 1. Public API
//==================================================================================

/// Returns `true` if `text` is a valid `YYYY-MM-DD` date within the supported range.
pub fn validate(text: &str) -> bool {
    validate_bytes(text.as_bytes())
}

/// Byte-level variant of [`validate`], used on raw buffer contents.
pub fn validate_bytes(bytes: &[u8]) -> bool {
    parse_components(bytes).is_some_and(|dc| validate_components(&dc))
}

/// Splits the fixed-width layout into numeric fields.
///
/// Requires exactly `DATE_LEN` bytes, dashes at positions 4 and 7 and ASCII
/// digits everywhere else.
pub fn parse_components(bytes: &[u8]) -> Option<DateComponents> {
    if bytes.len() != DATE_LEN || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    Some(DateComponents {
        year: parse_digits(&bytes[0..4])? as i32,
        month: parse_digits(&bytes[5..7])?,
        day: parse_digits(&bytes[8..10])?,
    })
}

/// Range-checks year, month and day, honouring leap years for February.
pub fn validate_components(dc: &DateComponents) -> bool {
    if !(MIN_YEAR..=MAX_YEAR).contains(&dc.year) {
        return false;
    }
    match days_in_month(dc.year, dc.month) {
        Some(max_day) => (1..=max_day).contains(&dc.day),
        None => false,
    }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (1-based) of `year`, or `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    if month == 2 && is_leap_year(year) {
        return Some(29);
    }
    Some(DAYS_IN_MONTH[(month - 1) as usize])
}

/// Signed calendar-day difference `to - from`.
pub fn days_between(from: &DateKey, to: &DateKey) -> i64 {
    to.naive_date().signed_duration_since(from.naive_date()).num_days()
}

//==================================================================================
// 2. Helpers
//==================================================================================

fn parse_digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |acc, &b| {
        if b.is_ascii_digit() {
            Some(acc * 10 + u32::from(b - b'0'))
        } else {
            None
        }
    })
}

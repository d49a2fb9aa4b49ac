//! Heuristic starting guess for where a target date lies in the buffer.
//!
//! The estimate only narrows the locator's initial window. It is allowed to be
//! absent or wrong; the locator stays correct either way.

use crate::search::date::{self, DATE_LEN};
use crate::types::DateKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionEstimator {
    /// How many leading bytes are inspected for the file's first date.
    pub scan_limit: usize,
}

impl PositionEstimator {
    pub fn new(scan_limit: usize) -> Self {
        Self { scan_limit }
    }

    /// Returns the first valid date found in the first `scan_limit` bytes,
    /// together with its offset.
    pub fn first_date(&self, buf: &[u8]) -> Option<(usize, DateKey)> {
        let limit = self.scan_limit.min(buf.len());
        (0..limit)
            .filter(|&pos| buf[pos].is_ascii_digit())
            .filter_map(|pos| {
                let candidate = buf.get(pos..pos + DATE_LEN)?;
                DateKey::from_bytes(candidate).map(|key| (pos, key))
            })
            .next()
    }

    /// Guesses the offset of `target` as `days_since_first_date * avg_bytes_per_day`,
    /// clamped to the buffer. A target before the file's first date maps to 0.
    ///
    /// Returns `None` when no valid date appears in the scanned prefix.
    pub fn estimate(&self, buf: &[u8], target: &DateKey, avg_bytes_per_day: usize) -> Option<usize> {
        if buf.is_empty() {
            return None;
        }
        let Some((offset, first)) = self.first_date(buf) else {
            log::debug!(
                "No valid date in the first {} bytes; searching the full buffer",
                self.scan_limit.min(buf.len())
            );
            return None;
        };

        let days_diff = date::days_between(&first, target);
        log::debug!(
            "First date {} at offset {}, target {} is {} day(s) later",
            first,
            offset,
            target,
            days_diff
        );
        if days_diff < 0 {
            return Some(0);
        }

        let guess = usize::try_from(days_diff)
            .unwrap_or(usize::MAX)
            .saturating_mul(avg_bytes_per_day);
        Some(guess.min(buf.len() - 1))
    }
}

// In: src/search/locator.rs

//! The binary search proper: finds the first and last records carrying the
//! target date and returns the byte range that covers them.
//!
//! Probes land on arbitrary offsets. Each probe is snapped to the start of its
//! record through the `LineBoundaryResolver`, and the record's date prefix is
//! compared to the target byte-wise. Equality never short-circuits: the search
//! keeps narrowing until it proves the record is the edge of the run, because a
//! single date may span any number of records.

use std::cmp::Ordering;

use crate::config::SliceConfig;
use crate::error::LogSliceError;
use crate::search::boundary::{BoundaryError, LineBoundaryResolver};
use crate::search::date::DATE_LEN;
use crate::search::estimator::PositionEstimator;
use crate::types::{DateKey, MatchRange};

/// Which edge of the run of matching records a search is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    First,
    Last,
}

#[derive(Debug, Clone, Copy)]
pub struct RangeLocator {
    resolver: LineBoundaryResolver,
    estimator: PositionEstimator,
    days_per_year: usize,
    window_days: usize,
}

impl Default for RangeLocator {
    fn default() -> Self {
        Self::from_config(&SliceConfig::default())
    }
}

impl RangeLocator {
    pub fn from_config(config: &SliceConfig) -> Self {
        Self {
            resolver: LineBoundaryResolver::from_config(config),
            estimator: PositionEstimator::new(config.estimate_scan_limit),
            days_per_year: config.days_per_year.max(1),
            window_days: config.window_days,
        }
    }

    pub fn resolver(&self) -> &LineBoundaryResolver {
        &self.resolver
    }

    //==============================================================================
    // 1. Public API
    //==============================================================================

    /// Locates every record dated `target`.
    ///
    /// Returns `Ok(None)` when no record carries the date. An error is only
    /// returned when the strict boundary policy cannot resolve a line boundary.
    pub fn locate(&self, buf: &[u8], target: &DateKey) -> Result<Option<MatchRange>, LogSliceError> {
        if buf.is_empty() {
            return Ok(None);
        }
        log::info!("Searching for date boundaries...");

        let last = buf.len() - 1;
        let (left, right) = self.initial_window(buf, target);
        let narrowed = (left, right) != (0, last);

        // Both searches only ever return a true edge, so a miss inside a
        // narrowed window just means the estimate was off.
        let start = match self.search(buf, target, left, right, Edge::First)? {
            Some(start) => start,
            None if narrowed => {
                log::debug!("First record not in window [{}, {}]; widening to full buffer", left, right);
                match self.search(buf, target, 0, last, Edge::First)? {
                    Some(start) => start,
                    None => return Ok(None),
                }
            }
            None => return Ok(None),
        };

        let end = match self.search(buf, target, start, right, Edge::Last)? {
            Some(end) => end,
            None if right < last => {
                log::debug!("Last record beyond offset {}; widening to end of buffer", right);
                match self.search(buf, target, start, last, Edge::Last)? {
                    Some(end) => end,
                    None => return Ok(None),
                }
            }
            None => return Ok(None),
        };

        log::info!("Found logs between positions {} and {}", start, end);
        Ok(Some(MatchRange { start, end }))
    }

    //==============================================================================
    // 2. Search Internals
    //==============================================================================

    /// The inclusive `[left, right]` window the first search starts from.
    fn initial_window(&self, buf: &[u8], target: &DateKey) -> (usize, usize) {
        let last = buf.len() - 1;
        let avg_bytes_per_day = buf.len() / self.days_per_year;

        match self.estimator.estimate(buf, target, avg_bytes_per_day) {
            Some(estimate) => {
                let reach = avg_bytes_per_day.saturating_mul(self.window_days);
                let left = estimate.saturating_sub(reach);
                let right = estimate.saturating_add(reach).min(last);
                log::debug!(
                    "Estimated offset {} ({} bytes/day), window [{}, {}]",
                    estimate,
                    avg_bytes_per_day,
                    left,
                    right
                );
                (left, right)
            }
            None => (0, last),
        }
    }

    /// Binary search over probe offsets in `[left, right]` for one edge of the run.
    ///
    /// For `Edge::First` the result is the start of the first matching record;
    /// for `Edge::Last` it is the offset just past the last matching record.
    fn search(
        &self,
        buf: &[u8],
        target: &DateKey,
        mut left: usize,
        mut right: usize,
        edge: Edge,
    ) -> Result<Option<usize>, LogSliceError> {
        let target = target.as_bytes();

        while left <= right {
            let mid = left + (right - left) / 2;
            let line_start = match self.resolver.find_line_start(buf, mid) {
                Ok(start) => start,
                Err(BoundaryError::OutOfBounds { .. }) => return Ok(None),
                Err(err) => return Err(err.into()),
            };

            // A record too short to hold a date can only be trailing debris.
            let Some(current) = key_at(buf, line_start) else {
                match mid.checked_sub(1) {
                    Some(r) => right = r,
                    None => break,
                }
                continue;
            };

            match (current.cmp(target), edge) {
                (Ordering::Less, _) => left = mid + 1,
                (Ordering::Greater, _) => match mid.checked_sub(1) {
                    Some(r) => right = r,
                    None => break,
                },
                (Ordering::Equal, Edge::First) => {
                    let previous = self.resolver.previous_line_start(buf, line_start)?;
                    let previous_matches = previous
                        .and_then(|start| key_at(buf, start))
                        .is_some_and(|key| key == target);
                    if !previous_matches {
                        return Ok(Some(line_start));
                    }
                    // `previous_matches` implies `line_start > 0`.
                    right = line_start - 1;
                }
                (Ordering::Equal, Edge::Last) => {
                    let record = self.resolver.line_span(buf, line_start)?;
                    let next = record.end;
                    let next_matches = key_at(buf, next).is_some_and(|key| key == target);
                    if !next_matches {
                        return Ok(Some(next));
                    }
                    left = next;
                }
            }
        }
        Ok(None)
    }
}

/// The date prefix of the record starting at `start`, if the buffer holds one.
fn key_at(buf: &[u8], start: usize) -> Option<&[u8]> {
    buf.get(start..start.checked_add(DATE_LEN)?)
}

//! Snaps arbitrary byte offsets to record boundaries.
//!
//! Binary search probes land on arbitrary offsets, which rarely coincide with
//! the start of a line. Both scans here are bounded so that corrupt or binary
//! input cannot turn a single probe into a scan of the whole file.

use thiserror::Error;

use crate::config::{BoundaryPolicy, SliceConfig};
use crate::types::RecordSpan;

/// Why a boundary could not be resolved.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryError {
    /// The offset lies at or beyond the end of the buffer.
    #[error("offset {offset} is outside a buffer of {len} bytes")]
    OutOfBounds { offset: usize, len: usize },

    /// No newline was found within `cap` bytes of `offset` (strict policy only).
    #[error("no newline within {cap} bytes of offset {offset}")]
    CapExceeded { offset: usize, cap: usize },
}

/// Bounded line-start / next-line resolution over a byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBoundaryResolver {
    pub max_backtrack: usize,
    pub max_forward: usize,
    pub policy: BoundaryPolicy,
}

impl Default for LineBoundaryResolver {
    fn default() -> Self {
        Self::from_config(&SliceConfig::default())
    }
}

impl LineBoundaryResolver {
    pub fn from_config(config: &SliceConfig) -> Self {
        Self {
            max_backtrack: config.max_backtrack,
            max_forward: config.max_forward,
            policy: config.boundary_policy,
        }
    }

    /// Returns the start of the record containing `pos`.
    ///
    /// `pos == 0` is always a line start. An offset at or past the end of the
    /// buffer is `OutOfBounds`, never silently mapped to 0.
    pub fn find_line_start(&self, buf: &[u8], pos: usize) -> Result<usize, BoundaryError> {
        if pos == 0 {
            return Ok(0);
        }
        if pos >= buf.len() {
            return Err(BoundaryError::OutOfBounds { offset: pos, len: buf.len() });
        }

        let floor = pos.saturating_sub(self.max_backtrack);
        match buf[floor..pos].iter().rposition(|&b| b == b'\n') {
            Some(idx) => Ok(floor + idx + 1),
            // The buffer start is a genuine line start, so reaching it is not a cap hit.
            None if floor == 0 => Ok(0),
            // The record starts exactly at the cap.
            None if buf[floor - 1] == b'\n' => Ok(floor),
            None => match self.policy {
                BoundaryPolicy::Lenient => Ok(floor),
                BoundaryPolicy::Strict => Err(BoundaryError::CapExceeded {
                    offset: pos,
                    cap: self.max_backtrack,
                }),
            },
        }
    }

    /// Returns the offset just past the `\n` that ends the record at `pos`,
    /// or the buffer length when the record is the unterminated last line.
    pub fn find_next_line(&self, buf: &[u8], pos: usize) -> Result<usize, BoundaryError> {
        if pos >= buf.len() {
            return Ok(buf.len());
        }

        let ceiling = pos.saturating_add(self.max_forward).min(buf.len());
        match buf[pos..ceiling].iter().position(|&b| b == b'\n') {
            Some(idx) => Ok(pos + idx + 1),
            None if ceiling == buf.len() => Ok(buf.len()),
            // The record ends exactly at the cap.
            None if buf[ceiling] == b'\n' => Ok(ceiling + 1),
            None => match self.policy {
                BoundaryPolicy::Lenient => Ok(buf.len()),
                BoundaryPolicy::Strict => Err(BoundaryError::CapExceeded {
                    offset: pos,
                    cap: self.max_forward,
                }),
            },
        }
    }

    /// Resolves the full record containing `pos`.
    pub fn line_span(&self, buf: &[u8], pos: usize) -> Result<RecordSpan, BoundaryError> {
        let start = self.find_line_start(buf, pos)?;
        let end = self.find_next_line(buf, start)?;
        Ok(RecordSpan { start, end })
    }

    /// Returns the start of the record immediately before the one starting at
    /// `line_start`, or `None` when `line_start` is the first record.
    pub fn previous_line_start(
        &self,
        buf: &[u8],
        line_start: usize,
    ) -> Result<Option<usize>, BoundaryError> {
        if line_start == 0 {
            return Ok(None);
        }
        // `line_start - 1` is the newline that terminates the previous record.
        self.find_line_start(buf, line_start - 1).map(Some)
    }
}

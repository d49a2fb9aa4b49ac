//! Half-open byte ranges produced by the search.

use std::ops::Range;

/// One record's line, `[start, end)`.
///
/// `start` is 0 or sits right after a `\n`; `end` sits right after the record's
/// `\n`, or at the end of the buffer for an unterminated final line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSpan {
    pub start: usize,
    pub end: usize,
}

/// All contiguous records carrying the target date, `[start, end)`.
///
/// Every record inside the range has the target date and the records directly
/// outside it do not. Contiguity relies on the input being sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRange {
    pub start: usize,
    pub end: usize,
}

impl MatchRange {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

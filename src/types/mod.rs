//! This module defines the core, strongly-typed values used throughout the
//! logslice search pipeline.
//!
//! It includes the validated `DateKey` and the half-open byte ranges
//! (`RecordSpan`, `MatchRange`) that the search hands to the writer.

pub mod date_key;
pub mod span;

// Re-export the main type(s) for easier access.
pub use date_key::DateKey;
pub use span::{MatchRange, RecordSpan};

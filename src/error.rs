// In: src/error.rs

//! This module defines the single, unified error type for the entire logslice library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use std::path::PathBuf;

use thiserror::Error;

use crate::search::boundary::BoundaryError;

#[derive(Error, Debug)]
pub enum LogSliceError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    /// The requested date is malformed or outside the supported calendar range.
    /// Checked once, before any search work starts.
    #[error("Invalid date '{0}'. Use YYYY-MM-DD (years 1900-2100)")]
    InvalidDate(String),

    /// The input file could not be opened, stat'ed or mapped.
    #[error("Cannot access source '{}': {}", .path.display(), .source)]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Source file '{}' is empty", .0.display())]
    EmptySource(PathBuf),

    #[error("No logs found for date: {0}")]
    NoMatch(String),

    /// A line boundary could not be resolved within the configured scan cap.
    /// Only raised under the strict boundary policy.
    #[error("No line boundary found within {cap} bytes of offset {offset}")]
    BoundaryUnresolvable { offset: usize, cap: usize },

    /// Writing to the output sink failed. The stream is aborted immediately.
    #[error("Output write failed: {0}")]
    SinkFailure(#[source] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically while loading a config file.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

impl From<BoundaryError> for LogSliceError {
    fn from(err: BoundaryError) -> Self {
        match err {
            BoundaryError::CapExceeded { offset, cap } => {
                LogSliceError::BoundaryUnresolvable { offset, cap }
            }
            BoundaryError::OutOfBounds { offset, len } => LogSliceError::InternalError(format!(
                "offset {} is outside a buffer of {} bytes",
                offset, len
            )),
        }
    }
}


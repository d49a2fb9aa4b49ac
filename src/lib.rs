//! This file is the root of the `logslice` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`search`, `output`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Re-exporting the handful of types a caller needs to run an extraction.
//!
//! The heavy lifting lives in `search` (pure, I/O-free date-range location over a
//! borrowed byte buffer) and `output` (chunked streaming into an injected sink).

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod config;
pub mod error;
pub mod extractor;
pub mod logging;
pub mod output;
pub mod search;
pub mod source;
pub mod types;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use config::{BoundaryPolicy, SliceConfig};
pub use error::LogSliceError;
pub use extractor::{ExtractReport, LogExtractor};
pub use search::RangeLocator;
pub use source::MappedSource;
pub use types::{DateKey, MatchRange, RecordSpan};

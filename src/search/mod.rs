// In: src/search/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Search Layer
// ====================================================================================
//
// The `search` layer is the pure core of logslice. It never performs I/O; it only
// interprets a borrowed `&[u8]` that some collaborator (usually `source`) produced.
//
// Data Flow:
//
//   1. [date]       -> Gates the user's date string into a `DateKey`
//         |
//   2. [estimator]  -> First valid date in the buffer + bytes/day density
//         |            => a guessed offset (or nothing)
//         |
//   3. [locator]    -> Narrowed window around the guess
//         |            `-> first-edge binary search  (uses `boundary`)
//         |            `-> last-edge binary search   (uses `boundary`)
//         |            `-> full-buffer retry if the window missed
//         |
//   4. => `MatchRange` handed to `output::writer`
//
// ====================================================================================
pub mod boundary;
pub mod date;
pub mod estimator;
pub mod locator;

pub use boundary::{BoundaryError, LineBoundaryResolver};
pub use estimator::PositionEstimator;
pub use locator::RangeLocator;

// In: src/output/mod.rs

//! Everything downstream of a located `MatchRange`: where the bytes go
//! (`sink`), how they are copied (`writer`) and how the copy is reported
//! (`progress`).

pub mod progress;
pub mod sink;
pub mod writer;

pub use progress::{ConsoleProgress, ProgressReporter, SilentProgress};
pub use sink::{DirectorySink, SinkProvider};
pub use writer::stream;

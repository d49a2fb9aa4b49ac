//! Advisory progress reporting for the range writer.
//!
//! Reporters must stay cheap: the writer calls `advance` after every chunk.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

pub trait ProgressReporter {
    /// Called once, before the first chunk, with the number of bytes to copy.
    fn start(&mut self, _total_bytes: u64) {}

    /// Called after each chunk with the cumulative number of bytes written.
    fn advance(&mut self, written: u64);

    /// Called once after the last chunk has been written and flushed.
    fn finish(&mut self) {}
}

/// Discards all progress updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn advance(&mut self, _written: u64) {}
}

/// A terminal progress bar: `[=====>    ]  42% 3s`.
pub struct ConsoleProgress {
    bar: ProgressBar,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        let style = ProgressStyle::with_template("[{bar:50}] {percent:>3}% {elapsed}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stdout());
        bar.set_style(style);
        Self { bar }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ConsoleProgress {
    fn start(&mut self, total_bytes: u64) {
        self.bar.set_length(total_bytes);
        self.bar.set_position(0);
    }

    fn advance(&mut self, written: u64) {
        // indicatif rate-limits redraws, so this stays off the copy loop's critical path.
        self.bar.set_position(written);
    }

    fn finish(&mut self) {
        self.bar.finish();
    }
}

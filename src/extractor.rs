// In: src/extractor.rs

//! The stateful facade over the pure search layer.
//!
//! `LogExtractor` wires one run together: the date is validated up front, the
//! source is mapped, the match range is located, and only then is an output
//! sink created and the range streamed into it. A run that finds nothing never
//! creates an output file.

use std::path::Path;
use std::sync::Arc;

use crate::config::SliceConfig;
use crate::error::LogSliceError;
use crate::output::{self, ProgressReporter, SinkProvider};
use crate::search::RangeLocator;
use crate::source::MappedSource;
use crate::types::{DateKey, MatchRange};

/// Summary of a successful extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractReport {
    pub date: DateKey,
    pub range: MatchRange,
    pub bytes_written: u64,
    /// Where the records were written, as reported by the sink provider.
    pub location: String,
}

#[derive(Debug, Clone)]
pub struct LogExtractor {
    config: Arc<SliceConfig>,
    locator: RangeLocator,
}

impl LogExtractor {
    pub fn new(config: Arc<SliceConfig>) -> Result<Self, LogSliceError> {
        config.validate()?;
        let locator = RangeLocator::from_config(&config);
        Ok(Self { config, locator })
    }

    pub fn config(&self) -> &SliceConfig {
        &self.config
    }

    /// Locates `date` in `buf`, turning an absent date into `NoMatch`.
    pub fn locate(&self, buf: &[u8], date: &DateKey) -> Result<MatchRange, LogSliceError> {
        self.locator
            .locate(buf, date)?
            .ok_or_else(|| LogSliceError::NoMatch(date.to_string()))
    }

    /// Extracts `date` from the file at `path`.
    ///
    /// The date is validated before the file is touched, so a bad date is
    /// always reported as `InvalidDate` regardless of the source's state.
    pub fn extract_file<S, P>(
        &self,
        path: impl AsRef<Path>,
        date: &str,
        sinks: &S,
        progress: &mut P,
    ) -> Result<ExtractReport, LogSliceError>
    where
        S: SinkProvider,
        P: ProgressReporter + ?Sized,
    {
        let date = DateKey::parse(date)?;
        let source = MappedSource::open(path)?;
        log::info!("Loaded {} ({} bytes)", source.path().display(), source.len());
        self.extract_bytes(&source, &date, sinks, progress)
    }

    /// Extracts `date` from an already-available buffer.
    pub fn extract_bytes<S, P>(
        &self,
        buf: &[u8],
        date: &DateKey,
        sinks: &S,
        progress: &mut P,
    ) -> Result<ExtractReport, LogSliceError>
    where
        S: SinkProvider,
        P: ProgressReporter + ?Sized,
    {
        let range = self.locate(buf, date)?;

        let mut sink = sinks.open(date)?;
        let bytes_written = output::stream(buf, range, &mut sink, self.config.chunk_size, progress)?;

        Ok(ExtractReport {
            date: *date,
            range,
            bytes_written,
            location: sinks.location(date),
        })
    }
}

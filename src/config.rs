// In: src/config.rs

//! The single source of truth for all logslice tunables.
//!
//! This module defines the unified `SliceConfig` struct, which is designed to be
//! created once at the application boundary (e.g., from the CLI or a user's JSON
//! file) and then passed down through the system via a shared, read-only
//! `Arc<SliceConfig>`.
//!
//! Every heuristic constant used by the search (the days-per-year density
//! approximation, the scan caps, the estimate window) lives here with a
//! documented default instead of being embedded as a literal.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LogSliceError;

//==================================================================================
// I. Core Configuration Enums
//==================================================================================

/// Decides what the boundary resolver does when a scan cap is reached before a
/// newline is found.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// **Default:** Reaching the cap is surfaced as `BoundaryUnresolvable`.
    /// A search never reads a date from an offset that is not a real line start.
    #[default]
    Strict,

    /// Reaching the cap returns the capped offset, even though it may sit in the
    /// middle of a record. Matches the behaviour of the legacy extractor and is
    /// only useful for files with a few pathological lines.
    Lenient,
}

//==================================================================================
// II. The Unified SliceConfig
//==================================================================================

/// The single, unified configuration for one extraction run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct SliceConfig {
    /// Divisor used to turn the file length into an average bytes-per-day density.
    /// A fixed annual approximation, not derived from the file's real date span.
    #[serde(default = "default_days_per_year")]
    pub days_per_year: usize,

    /// Half-width of the estimate-narrowed search window, in days of average density.
    #[serde(default = "default_window_days")]
    pub window_days: usize,

    /// Maximum bytes scanned backward when snapping an offset to its line start.
    #[serde(default = "default_scan_cap")]
    pub max_backtrack: usize,

    /// Maximum bytes scanned forward when looking for the next line.
    #[serde(default = "default_scan_cap")]
    pub max_forward: usize,

    /// How many leading bytes the position estimator inspects for the first date.
    #[serde(default = "default_scan_cap")]
    pub estimate_scan_limit: usize,

    /// Size of each write issued by the range writer.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    #[serde(default)]
    pub boundary_policy: BoundaryPolicy,

    /// Directory that receives `output_<DATE>.txt`. Created on demand.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            days_per_year: default_days_per_year(),
            window_days: default_window_days(),
            max_backtrack: default_scan_cap(),
            max_forward: default_scan_cap(),
            estimate_scan_limit: default_scan_cap(),
            chunk_size: default_chunk_size(),
            boundary_policy: BoundaryPolicy::default(),
            output_dir: default_output_dir(),
        }
    }
}

impl SliceConfig {
    /// Loads a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LogSliceError> {
        let text = fs::read_to_string(path.as_ref())?;
        let config: SliceConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings that would make the search or the writer degenerate.
    pub fn validate(&self) -> Result<(), LogSliceError> {
        let checks = [
            ("days_per_year", self.days_per_year),
            ("max_backtrack", self.max_backtrack),
            ("max_forward", self.max_forward),
            ("chunk_size", self.chunk_size),
        ];
        for (name, value) in checks {
            if value == 0 {
                return Err(LogSliceError::Config(format!("{} must be greater than 0", name)));
            }
        }
        Ok(())
    }
}

/// Helper for `serde` to default the annual density divisor.
fn default_days_per_year() -> usize {
    365
}

fn default_window_days() -> usize {
    2
}

/// Shared default for every bounded scan.
fn default_scan_cap() -> usize {
    1000
}

fn default_chunk_size() -> usize {
    16 * 1024
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = SliceConfig::default();
        assert_eq!(config.days_per_year, 365);
        assert_eq!(config.window_days, 2);
        assert_eq!(config.max_backtrack, 1000);
        assert_eq!(config.max_forward, 1000);
        assert_eq!(config.estimate_scan_limit, 1000);
        assert_eq!(config.chunk_size, 16384);
        assert_eq!(config.boundary_policy, BoundaryPolicy::Strict);
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: SliceConfig =
            serde_json::from_str(r#"{"chunk_size": 4096, "boundary_policy": "lenient"}"#).unwrap();
        assert_eq!(config.chunk_size, 4096);
        assert_eq!(config.boundary_policy, BoundaryPolicy::Lenient);
        assert_eq!(config.days_per_year, 365);
    }

    #[test]
    fn test_from_json_file_rejects_zero_chunk_size() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"chunk_size": 0}}"#).unwrap();

        let result = SliceConfig::from_json_file(file.path());
        match result {
            Err(LogSliceError::Config(msg)) => assert!(msg.contains("chunk_size")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_file_reports_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            SliceConfig::from_json_file(file.path()),
            Err(LogSliceError::SerdeJson(_))
        ));
    }
}

//! Output sink construction.
//!
//! The core never decides where output goes or creates directories itself; a
//! `SinkProvider` is injected by the caller instead.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::error::LogSliceError;
use crate::types::DateKey;

pub trait SinkProvider {
    type Sink: std::io::Write;

    /// Creates the sink that will receive the records for `date`.
    fn open(&self, date: &DateKey) -> Result<Self::Sink, LogSliceError>;

    /// Human-readable location of the sink, used in status messages.
    fn location(&self, date: &DateKey) -> String;
}

/// Writes each date to `<dir>/output_<DATE>.txt`, creating `dir` on demand.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, date: &DateKey) -> PathBuf {
        self.dir.join(format!("output_{}.txt", date))
    }
}

impl SinkProvider for DirectorySink {
    type Sink = File;

    fn open(&self, date: &DateKey) -> Result<File, LogSliceError> {
        fs::create_dir_all(&self.dir).map_err(LogSliceError::SinkFailure)?;
        File::create(self.path_for(date)).map_err(LogSliceError::SinkFailure)
    }

    fn location(&self, date: &DateKey) -> String {
        self.path_for(date).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_creates_nested_directory() {
        let root = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(root.path().join("a").join("b"));
        let date = DateKey::parse("2024-03-15").unwrap();

        let mut file = sink.open(&date).unwrap();
        file.write_all(b"x").unwrap();

        let expected = root.path().join("a").join("b").join("output_2024-03-15.txt");
        assert_eq!(sink.path_for(&date), expected);
        assert!(expected.exists());
        assert!(sink.location(&date).ends_with("output_2024-03-15.txt"));
    }

    #[test]
    fn test_open_fails_when_dir_is_a_file() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("blocker");
        fs::write(&blocker, b"").unwrap();

        let sink = DirectorySink::new(&blocker);
        let date = DateKey::parse("2024-03-15").unwrap();
        assert!(matches!(sink.open(&date), Err(LogSliceError::SinkFailure(_))));
    }
}

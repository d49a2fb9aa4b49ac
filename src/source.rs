// In: src/source.rs

//! Scoped, read-only access to the input file's bytes.
//!
//! `MappedSource` owns both the file handle and its memory map. Dropping it
//! releases both, so every exit path (normal return, early `?`, panic unwind)
//! unmaps the file without explicit cleanup code.

use std::fs::File;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use memmap2::Mmap;

use crate::error::LogSliceError;

#[derive(Debug)]
pub struct MappedSource {
    path: PathBuf,
    mmap: Mmap,
    // Kept alive for the lifetime of the mapping.
    _file: File,
}

impl MappedSource {
    /// Opens and maps `path` read-only.
    ///
    /// Fails with `SourceUnavailable` when the file cannot be opened, stat'ed or
    /// mapped, and with `EmptySource` for a zero-length file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LogSliceError> {
        let path = path.as_ref().to_path_buf();
        let unavailable = |source: std::io::Error| LogSliceError::SourceUnavailable {
            path: path.clone(),
            source,
        };

        let file = File::open(&path).map_err(unavailable)?;
        let len = file.metadata().map_err(unavailable)?.len();
        if len == 0 {
            return Err(LogSliceError::EmptySource(path.clone()));
        }

        // SAFETY: the mapping is read-only. Callers must not truncate or rewrite
        // the file while this value is alive.
        let mmap = unsafe { Mmap::map(&file) }.map_err(unavailable)?;
        log::debug!("Mapped {} ({} bytes)", path.display(), mmap.len());

        Ok(Self { path, mmap, _file: file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

}

impl Deref for MappedSource {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.mmap
    }
}

//! Streams a located range from the source buffer to a sink in bounded chunks.

use std::io::Write;

use crate::error::LogSliceError;
use crate::output::progress::ProgressReporter;
use crate::types::MatchRange;

/// Copies `range` from `buf` into `sink`, `chunk_size` bytes at a time.
///
/// Progress is reported as a cumulative byte count after every chunk. There is
/// no retry: the first failed write or flush aborts the copy and is returned as
/// `SinkFailure`. Returns the number of bytes written.
pub fn stream<W, P>(
    buf: &[u8],
    range: MatchRange,
    sink: &mut W,
    chunk_size: usize,
    progress: &mut P,
) -> Result<u64, LogSliceError>
where
    W: Write + ?Sized,
    P: ProgressReporter + ?Sized,
{
    if chunk_size == 0 {
        return Err(LogSliceError::Config("chunk_size must be greater than 0".to_string()));
    }
    let bytes = buf.get(range.as_range()).ok_or_else(|| {
        LogSliceError::InternalError(format!(
            "range {}..{} exceeds a buffer of {} bytes",
            range.start,
            range.end,
            buf.len()
        ))
    })?;

    progress.start(bytes.len() as u64);
    let mut written: u64 = 0;
    for chunk in bytes.chunks(chunk_size) {
        sink.write_all(chunk).map_err(LogSliceError::SinkFailure)?;
        written += chunk.len() as u64;
        progress.advance(written);
    }
    sink.flush().map_err(LogSliceError::SinkFailure)?;
    progress.finish();

    log::debug!("Wrote {} bytes in chunks of {}", written, chunk_size);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::progress::SilentProgress;
    use std::io;

    #[derive(Default)]
    struct RecordingProgress {
        total: Option<u64>,
        updates: Vec<u64>,
        finished: bool,
    }

    impl ProgressReporter for RecordingProgress {
        fn start(&mut self, total_bytes: u64) {
            self.total = Some(total_bytes);
        }
        fn advance(&mut self, written: u64) {
            self.updates.push(written);
        }
        fn finish(&mut self) {
            self.finished = true;
        }
    }

    /// Accepts `capacity` bytes, then fails every write.
    struct FailingWriter {
        accepted: Vec<u8>,
        capacity: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            if self.accepted.len() + data.len() > self.capacity {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            self.accepted.extend_from_slice(data);
            Ok(data.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_streams_range_in_chunks() {
        let buf: Vec<u8> = (0..100u8).collect();
        let mut sink = Vec::new();
        let mut progress = RecordingProgress::default();

        let written = stream(&buf, MatchRange { start: 10, end: 50 }, &mut sink, 16, &mut progress).unwrap();

        assert_eq!(written, 40);
        assert_eq!(sink, &buf[10..50]);
        assert_eq!(progress.total, Some(40));
        assert_eq!(progress.updates, vec![16, 32, 40]);
        assert!(progress.finished);
    }

    #[test]
    fn test_sink_failure_aborts_immediately() {
        let buf = vec![b'a'; 64];
        let mut sink = FailingWriter { accepted: Vec::new(), capacity: 20 };
        let mut progress = RecordingProgress::default();

        let result = stream(&buf, MatchRange { start: 0, end: 64 }, &mut sink, 8, &mut progress);

        assert!(matches!(result, Err(LogSliceError::SinkFailure(_))));
        assert_eq!(sink.accepted.len(), 16);
        assert_eq!(progress.updates, vec![8, 16]);
        assert!(!progress.finished);
    }

    #[test]
    fn test_rejects_zero_chunk_and_bad_range() {
        let buf = b"2024-01-01 a\n";
        let mut sink = Vec::new();
        let mut progress = RecordingProgress::default();

        assert!(matches!(
            stream(buf, MatchRange { start: 0, end: 5 }, &mut sink, 0, &mut progress),
            Err(LogSliceError::Config(_))
        ));
        assert!(matches!(
            stream(buf, MatchRange { start: 0, end: 99 }, &mut sink, 4, &mut progress),
            Err(LogSliceError::InternalError(_))
        ));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_empty_range_writes_nothing() {
        let mut sink = Vec::new();
        let written = stream(b"abc", MatchRange { start: 1, end: 1 }, &mut sink, 4, &mut SilentProgress).unwrap();
        assert_eq!(written, 0);
        assert!(sink.is_empty());
    }
}

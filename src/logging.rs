// In: src/logging.rs

//! One-time `env_logger` setup for the CLI.
//!
//! Library code only emits `log` records; installing a logger is left to the
//! binary (or to a host application that embeds the library).

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Once;

use log::LevelFilter;

use crate::error::LogSliceError;

static INIT_LOGGER: Once = Once::new();

/// Installs the process-wide logger. `verbose` lowers the threshold from
/// `Warn` to `Info`; `RUST_LOG` still overrides both. Subsequent calls are no-ops.
///
/// When `log_file` is given, records are appended to it instead of stderr.
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<(), LogSliceError> {
    let target = match log_file {
        Some(path) => Some(OpenOptions::new().append(true).create(true).open(path)?),
        None => None,
    };

    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(if verbose { LevelFilter::Info } else { LevelFilter::Warn });
        builder.parse_default_env();

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(file) = target {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
    Ok(())
}

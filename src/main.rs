// In: src/main.rs

//! `logslice` command-line entry point.
//!
//! Usage: `logslice YYYY-MM-DD [-v]`. Exits with 0 on success and 1 on any
//! failure (invalid date, unreadable or empty source, no matches, write error).

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use colored::Colorize;

use logslice::output::{ConsoleProgress, DirectorySink, ProgressReporter, SilentProgress};
use logslice::{logging, LogExtractor, LogSliceError, SliceConfig};

#[derive(Parser, Debug)]
#[command(
    name = "logslice",
    about = "Extract every record for one date from a date-sorted log file",
    version
)]
struct Cli {
    /// Date to extract, as YYYY-MM-DD
    date: String,

    /// Print search diagnostics
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Log file to search
    #[arg(long, default_value = "test_logs.log")]
    input: PathBuf,

    /// Directory for output_<DATE>.txt (overrides the config file)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// JSON file with search and output tunables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable the progress bar
    #[arg(long)]
    no_progress: bool,

    /// Append diagnostics to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version are not failures.
            return if err.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "Error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), LogSliceError> {
    logging::init_logging(cli.verbose, cli.log_file.as_deref())?;

    let mut config = match &cli.config {
        Some(path) => SliceConfig::from_json_file(path)?,
        None => SliceConfig::default(),
    };
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }

    let sinks = DirectorySink::new(config.output_dir.clone());
    let extractor = LogExtractor::new(Arc::new(config))?;

    let mut progress: Box<dyn ProgressReporter> = if cli.no_progress {
        Box::new(SilentProgress)
    } else {
        Box::new(ConsoleProgress::new())
    };

    let report = extractor.extract_file(&cli.input, &cli.date, &sinks, progress.as_mut())?;
    log::info!(
        "Copied {} bytes ({}..{}) for {}",
        report.bytes_written,
        report.range.start,
        report.range.end,
        report.date
    );
    println!("{} {}", "Successfully extracted logs to:".green(), report.location);
    Ok(())
}

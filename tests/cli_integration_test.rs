//! CLI integration tests
//!
//! Runs the logslice binary against small logs in a temporary working directory
//! and checks exit codes and output files.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const LOG: &str = "2024-01-01 a\n2024-01-01 b\n2024-01-02 c\n";

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_logslice"))
        .current_dir(dir)
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute logslice")
}

#[test]
fn test_extracts_into_default_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("test_logs.log"), LOG).unwrap();

    let output = run_in(dir.path(), &["2024-01-01", "--no-progress"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let written = fs::read_to_string(dir.path().join("output").join("output_2024-01-01.txt")).unwrap();
    assert_eq!(written, "2024-01-01 a\n2024-01-01 b\n");
    assert!(String::from_utf8_lossy(&output.stdout).contains("Successfully extracted logs to:"));
}

#[test]
fn test_verbose_flag_and_custom_paths() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("app.log"), LOG).unwrap();

    let output = run_in(
        dir.path(),
        &["2024-01-02", "-v", "--input", "app.log", "--output-dir", "slices", "--no-progress"],
    );

    assert!(output.status.success());
    let written = fs::read_to_string(dir.path().join("slices").join("output_2024-01-02.txt")).unwrap();
    assert_eq!(written, "2024-01-02 c\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Searching for date boundaries"));
}

#[test]
fn test_failures_exit_with_one() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("test_logs.log"), LOG).unwrap();

    for args in [
        vec!["2024-02-30"],
        vec!["2024-01-03", "--no-progress"],
        vec!["2024-01-01", "--input", "missing.log"],
    ] {
        let output = run_in(dir.path(), &args);
        assert_eq!(output.status.code(), Some(1), "args {:?}", args);
        assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
    }

    fs::write(dir.path().join("empty.log"), "").unwrap();
    let output = run_in(dir.path(), &["2024-01-01", "--input", "empty.log"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_missing_date_argument_is_a_failure() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_file_is_honoured() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("test_logs.log"), LOG).unwrap();
    fs::write(
        dir.path().join("slice.json"),
        r#"{"output_dir": "from-config", "chunk_size": 3}"#,
    )
    .unwrap();

    let output = run_in(dir.path(), &["2024-01-01", "--config", "slice.json", "--no-progress"]);

    assert!(output.status.success());
    let written = fs::read_to_string(dir.path().join("from-config").join("output_2024-01-01.txt")).unwrap();
    assert_eq!(written, "2024-01-01 a\n2024-01-01 b\n");
}

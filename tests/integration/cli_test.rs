use anyhow::Result;
use std::process::Command;

#[path = "../common/mod.rs"]
mod common;
use common::create_trace_file;

const BIN: &str = env!("CARGO_BIN_EXE_memsim");

/// Test that the CLI prints a report for a valid trace
#[test]
fn test_cli_text_report() -> Result<()> {
    let trace = create_trace_file(&["00001000 R", "00002000 R", "00001000 W", "00003000 R"])?;

    let output = Command::new(BIN)
        .arg(trace.path())
        .args(["2", "lru"])
        .output()?;

    assert!(output.status.success(), "CLI run failed");
    let output_str = String::from_utf8(output.stdout)?;
    assert!(output_str.contains("total memory frames: 2"));
    assert!(output_str.contains("events in trace: 4"));
    assert!(output_str.contains("total disk reads: 3"));
    assert!(output_str.contains("total disk writes: 0"));

    Ok(())
}

/// Test that debug mode prints the decision trace
#[test]
fn test_cli_debug_trace() -> Result<()> {
    let trace = create_trace_file(&["00001000 W", "00002000 R"])?;

    let output = Command::new(BIN)
        .arg(trace.path())
        .args(["1", "clock", "--debug"])
        .output()?;

    assert!(output.status.success(), "CLI run failed");
    let output_str = String::from_utf8(output.stdout)?;
    assert!(output_str.contains("[MISS] Page fault on 1"));
    assert!(output_str.contains("Evicting dirty page 1"));
    assert!(output_str.contains("total disk writes: 1"));

    Ok(())
}

/// Test that JSON output carries the counters
#[test]
fn test_cli_json_report() -> Result<()> {
    let trace = create_trace_file(&["00001000 W", "00002000 R"])?;

    let output = Command::new(BIN)
        .arg(trace.path())
        .args(["1", "rand", "--seed", "3", "--format", "json"])
        .output()?;

    assert!(output.status.success(), "CLI run failed");
    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["policy"], "random");
    assert_eq!(report["page_faults"], 2);
    assert_eq!(report["disk_writes"], 1);

    Ok(())
}

/// Test that bad input fails with a useful message
#[test]
fn test_cli_rejects_bad_input() -> Result<()> {
    let trace = create_trace_file(&["00001000 R", "00002000 Z"])?;

    let output = Command::new(BIN)
        .arg(trace.path())
        .args(["2", "clock"])
        .output()?;
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("line 2"));

    let output = Command::new(BIN)
        .arg(trace.path())
        .args(["2", "fifo"])
        .output()?;
    assert!(!output.status.success());

    Ok(())
}

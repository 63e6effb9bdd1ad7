// Simulation Integration Tests

use anyhow::Result;

use memsim::simulation::{SimulationConfig, run_simulation};
use memsim::{Policy, TraceError};

#[path = "../common/mod.rs"]
mod common;
use common::create_trace_file;

fn config(policy: Policy, frames: usize) -> SimulationConfig {
    SimulationConfig {
        frames,
        policy,
        seed: Some(7),
        ..SimulationConfig::default()
    }
}

#[test]
fn test_trace_file_all_policies() -> Result<()> {
    // Pages 0x41f, 0x13f5e, 0x41f, 0x2a, 0x13f5e
    let trace = create_trace_file(&[
        "0041f7a0 R",
        "13f5e2c0 W",
        "0041fa00 W",
        "0002a000 R",
        "13f5e000 R",
    ])?;

    for policy in [Policy::Clock, Policy::Lru, Policy::Random] {
        let report = run_simulation(trace.path(), &config(policy, 4))?;
        assert_eq!(report.frames, 4);
        assert_eq!(report.events, 5);
        assert_eq!(report.page_faults, 3);
        assert_eq!(report.disk_reads, 3);
        assert_eq!(report.disk_writes, 0);
        assert!((report.hit_rate - 0.4).abs() < 1e-9);
    }
    Ok(())
}

#[test]
fn test_lru_writes_back_dirty_victims() -> Result<()> {
    // Cycles over three pages with two frames, writing every access
    let trace = create_trace_file(&[
        "00001000 W", "00002000 W", "00003000 W",
        "00001000 W", "00002000 W", "00003000 W",
    ])?;

    let report = run_simulation(trace.path(), &config(Policy::Lru, 2))?;
    assert_eq!(report.page_faults, 6);
    assert_eq!(report.disk_writes, 4);
    assert_eq!(report.hit_rate, 0.0);
    Ok(())
}

#[test]
fn test_page_offset_controls_page_size() -> Result<()> {
    let trace = create_trace_file(&["00000000 R", "00000100 R", "00001000 R", "00001100 R"])?;

    let mut small_pages = config(Policy::Clock, 8);
    small_pages.page_offset = 8;
    assert_eq!(run_simulation(trace.path(), &small_pages)?.page_faults, 4);

    let large_pages = config(Policy::Clock, 8);
    assert_eq!(run_simulation(trace.path(), &large_pages)?.page_faults, 2);
    Ok(())
}

#[test]
fn test_malformed_trace_aborts() -> Result<()> {
    let trace = create_trace_file(&["00001000 R", "00002000"])?;

    let err = run_simulation(trace.path(), &config(Policy::Lru, 2)).unwrap_err();
    match err.downcast_ref::<TraceError>() {
        Some(TraceError::MissingOperation { line }) => assert_eq!(*line, 2),
        other => panic!("unexpected error: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_missing_trace_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = run_simulation(dir.path().join("missing.trace"), &config(Policy::Clock, 2));
    assert!(result.is_err());
}

#[test]
fn test_empty_trace_hit_rate() -> Result<()> {
    let trace = create_trace_file(&[])?;
    let report = run_simulation(trace.path(), &config(Policy::Random, 3))?;
    assert_eq!(report.events, 0);
    assert_eq!(report.hit_rate, 0.0);
    Ok(())
}

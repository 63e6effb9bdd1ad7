use std::io::BufRead;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use crate::mmu::{Mmu, MmuObserver};
use crate::simulation::config::SimulationConfig;
use crate::simulation::report::SimulationReport;
use crate::trace::{TraceError, TraceEvent, TraceReader, open_trace};

/// Feed trace events to an MMU, stopping at the first malformed line.
/// Returns the number of events processed.
pub fn run_events<I>(mmu: &mut dyn Mmu, events: I) -> Result<u64, TraceError>
where
    I: IntoIterator<Item = Result<TraceEvent, TraceError>>,
{
    let mut count = 0;
    for event in events {
        let event = event?;
        mmu.access(event.page, event.kind);
        count += 1;
    }
    Ok(count)
}

/// Run a trace from any buffered reader
pub fn simulate<R: BufRead>(
    reader: R,
    config: &SimulationConfig,
    observer: Option<Box<dyn MmuObserver>>,
) -> Result<SimulationReport> {
    execute(TraceReader::new(reader, config.page_offset), config, observer)
}

/// Run a trace file with the configured policy
pub fn run_simulation(path: impl AsRef<Path>, config: &SimulationConfig) -> Result<SimulationReport> {
    run_simulation_with_observer(path, config, None)
}

/// Run a trace file, sending the debug trace to `observer` when one is given
pub fn run_simulation_with_observer(
    path: impl AsRef<Path>,
    config: &SimulationConfig,
    observer: Option<Box<dyn MmuObserver>>,
) -> Result<SimulationReport> {
    let path = path.as_ref();
    let reader = open_trace(path, config.page_offset)
        .with_context(|| format!("Failed to open trace file {}", path.display()))?;

    log::info!("Reading trace from {}", path.display());
    execute(reader, config, observer)
}

fn execute<I>(
    events: I,
    config: &SimulationConfig,
    observer: Option<Box<dyn MmuObserver>>,
) -> Result<SimulationReport>
where
    I: IntoIterator<Item = Result<TraceEvent, TraceError>>,
{
    let mut mmu = config.policy.build(config.frames, config.seed)?;
    if let Some(observer) = observer {
        mmu.set_observer(observer);
    }
    if config.debug {
        mmu.set_debug();
    }

    log::info!(
        "Starting {} simulation with {} frames",
        config.policy,
        config.frames
    );

    let start = Instant::now();
    let event_count = run_events(mmu.as_mut(), events)?;
    let elapsed = start.elapsed();

    log::info!(
        "Processed {} events: {} faults, {} disk writes",
        event_count,
        mmu.total_page_faults(),
        mmu.total_disk_writes()
    );

    Ok(SimulationReport::new(
        config.policy,
        config.frames,
        event_count,
        mmu.stats(),
        elapsed,
    ))
}

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::mmu::{MmuStats, Policy};

/// Fraction of accesses that did not fault. Zero when there were no events.
pub fn hit_rate(page_faults: u64, events: u64) -> f64 {
    if events == 0 {
        return 0.0;
    }
    1.0 - (page_faults as f64 / events as f64)
}

/// Results of a simulation run
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub policy: Policy,
    pub frames: usize,
    pub events: u64,
    pub disk_reads: u64,
    pub disk_writes: u64,
    pub page_faults: u64,
    pub hit_rate: f64,
    pub elapsed: Duration,
}

impl SimulationReport {
    pub fn new(policy: Policy, frames: usize, events: u64, stats: MmuStats, elapsed: Duration) -> Self {
        Self {
            policy,
            frames,
            events,
            disk_reads: stats.disk_reads,
            disk_writes: stats.disk_writes,
            page_faults: stats.page_faults,
            hit_rate: hit_rate(stats.page_faults, events),
            elapsed,
        }
    }

    /// Fraction of accesses that faulted
    pub fn fault_rate(&self) -> f64 {
        if self.events == 0 {
            return 0.0;
        }
        self.page_faults as f64 / self.events as f64
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "replacement policy: {}", self.policy)?;
        writeln!(f, "total memory frames: {}", self.frames)?;
        writeln!(f, "events in trace: {}", self.events)?;
        writeln!(f, "total disk reads: {}", self.disk_reads)?;
        writeln!(f, "total disk writes: {}", self.disk_writes)?;
        writeln!(f, "page fault rate: {:.4}", self.fault_rate())?;
        writeln!(f, "hit rate: {:.4}", self.hit_rate)?;
        write!(f, "execution time: {:.6} seconds", self.elapsed.as_secs_f64())
    }
}

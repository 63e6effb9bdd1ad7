// Memsim virtual memory page replacement simulator

pub mod common;
pub mod mmu;
pub mod simulation;
pub mod trace;

// Re-export key items for convenient access
pub use common::types::{AccessKind, FrameId, PageNumber};
pub use mmu::{ClockMmu, LruMmu, Mmu, MmuError, MmuEvent, MmuObserver, MmuStats, Policy, RandomMmu};
pub use simulation::{SimulationConfig, SimulationReport, run_simulation};
pub use trace::{TraceError, TraceEvent};

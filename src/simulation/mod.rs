pub mod config;
pub mod report;
pub mod runner;

pub use config::SimulationConfig;
pub use report::{SimulationReport, hit_rate};
pub use runner::{run_events, run_simulation, run_simulation_with_observer, simulate};

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use memsim::common::DEFAULT_PAGE_OFFSET;
use memsim::mmu::{Policy, PrintObserver};
use memsim::simulation::{SimulationConfig, run_simulation_with_observer};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(author, version, about = "Memsim - virtual memory page replacement simulator")]
struct Cli {
    /// Trace file of `<hex address> <R|W>` lines
    trace_file: PathBuf,

    /// Number of physical frames
    frames: usize,

    /// Replacement policy (clock, lru, rand)
    policy: Policy,

    /// Print every hit, miss and eviction decision
    #[arg(short, long)]
    debug: bool,

    /// Page size as a power of two
    #[arg(short, long, default_value_t = DEFAULT_PAGE_OFFSET)]
    page_offset: u32,

    /// Seed for the random policy
    #[arg(short, long)]
    seed: Option<u64>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = SimulationConfig {
        frames: cli.frames,
        policy: cli.policy,
        page_offset: cli.page_offset,
        debug: cli.debug,
        seed: cli.seed,
    };

    let observer = cli.debug.then(|| Box::new(PrintObserver) as Box<dyn memsim::MmuObserver>);
    let report = run_simulation_with_observer(&cli.trace_file, &config, observer)?;

    match cli.format {
        OutputFormat::Text => println!("{}", report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

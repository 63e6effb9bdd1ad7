use crate::common::types::DEFAULT_PAGE_OFFSET;
use crate::mmu::Policy;

/// Configuration for a single simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Number of physical frames
    pub frames: usize,

    /// Replacement policy
    pub policy: Policy,

    /// Bits of the address that lie within a page
    pub page_offset: u32,

    /// Emit the per-access decision trace
    pub debug: bool,

    /// Seed for the random policy, entropy when absent
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frames: 64,
            policy: Policy::default(),
            page_offset: DEFAULT_PAGE_OFFSET, // 4KB pages
            debug: false,
            seed: None,
        }
    }
}

#![allow(dead_code)]

use std::io::Write;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::NamedTempFile;

use memsim::{AccessKind, Mmu, PageNumber, Policy};

// Write trace lines to a temporary file
pub fn create_trace_file(lines: &[&str]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    for line in lines {
        writeln!(file, "{}", line)?;
    }
    file.flush()?;
    Ok(file)
}

// Build one engine per policy with the same frame count
pub fn create_all_engines(frames: usize) -> Result<Vec<(Policy, Box<dyn Mmu>)>> {
    let mut engines = Vec::new();
    for policy in [Policy::Clock, Policy::Lru, Policy::Random] {
        engines.push((policy, policy.build(frames, Some(1234))?));
    }
    Ok(engines)
}

// Generate a reproducible random access sequence over `page_span` pages
pub fn generate_accesses(seed: u64, count: usize, page_span: PageNumber) -> Vec<(PageNumber, AccessKind)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let page = rng.gen_range(0..page_span);
            let kind = if rng.gen_bool(0.3) { AccessKind::Write } else { AccessKind::Read };
            (page, kind)
        })
        .collect()
}

use crate::common::types::{AccessKind, PageNumber};
use crate::mmu::observer::MmuObserver;

/// Snapshot of the cumulative counters kept by every MMU
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MmuStats {
    pub disk_reads: u64,
    pub disk_writes: u64,
    pub page_faults: u64,
}

impl MmuStats {
    /// Record a page fault, which always costs one disk read
    pub(crate) fn record_fault(&mut self) {
        self.page_faults += 1;
        self.disk_reads += 1;
    }

    /// Record the write-back of a dirty victim
    pub(crate) fn record_write_back(&mut self) {
        self.disk_writes += 1;
    }
}

/// Common interface of the page replacement engines.
///
/// Accesses never fail: any page number is valid, and a fault is resolved
/// either by loading into a free frame or by evicting a resident page.
pub trait Mmu {
    /// Record an access of the given kind to `page`
    fn access(&mut self, page: PageNumber, kind: AccessKind);

    /// Record a read access
    fn read(&mut self, page: PageNumber) {
        self.access(page, AccessKind::Read);
    }

    /// Record a write access, marking the page dirty
    fn write(&mut self, page: PageNumber) {
        self.access(page, AccessKind::Write);
    }

    /// Current counter values
    fn stats(&self) -> MmuStats;

    fn total_disk_reads(&self) -> u64 {
        self.stats().disk_reads
    }

    fn total_disk_writes(&self) -> u64 {
        self.stats().disk_writes
    }

    fn total_page_faults(&self) -> u64 {
        self.stats().page_faults
    }

    /// Enable the decision trace
    fn set_debug(&mut self);

    /// Disable the decision trace
    fn reset_debug(&mut self);

    fn is_debug(&self) -> bool;

    /// Replace the observer that receives the decision trace
    fn set_observer(&mut self, observer: Box<dyn MmuObserver>);

    /// Number of physical frames in the pool
    fn frame_count(&self) -> usize;

    /// Number of pages currently held in frames
    fn resident_count(&self) -> usize;

    fn is_resident(&self, page: PageNumber) -> bool;

    /// Whether `page` is resident and has been written since it was loaded
    fn is_dirty(&self, page: PageNumber) -> bool;
}

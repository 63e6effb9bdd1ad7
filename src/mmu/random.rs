use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::types::{AccessKind, FrameId, PageNumber};
use crate::mmu::base::{Mmu, MmuStats};
use crate::mmu::error::MmuError;
use crate::mmu::observer::{DebugChannel, MmuEvent, MmuObserver};

#[derive(Debug, Clone, Copy)]
struct Resident {
    frame: FrameId,
    dirty: bool,
}

/// Random page replacement.
///
/// The victim is drawn uniformly from the occupied frames. Once the pool is
/// full every frame holds exactly one page, so each resident page is equally
/// likely to be chosen.
pub struct RandomMmu<R: Rng = StdRng> {
    capacity: usize,
    page_table: HashMap<PageNumber, Resident>,
    frame_table: Vec<PageNumber>,
    rng: R,
    stats: MmuStats,
    debug: DebugChannel,
}

impl RandomMmu<StdRng> {
    /// Create a random MMU seeded from system entropy
    pub fn new(frames: usize) -> Result<Self, MmuError> {
        Self::with_rng(frames, StdRng::from_entropy())
    }

    /// Create a random MMU with a reproducible victim sequence
    pub fn seeded(frames: usize, seed: u64) -> Result<Self, MmuError> {
        Self::with_rng(frames, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomMmu<R> {
    /// Create a random MMU drawing victims from `rng`
    pub fn with_rng(frames: usize, rng: R) -> Result<Self, MmuError> {
        if frames == 0 {
            return Err(MmuError::InvalidFrameCount(frames));
        }

        Ok(Self {
            capacity: frames,
            page_table: HashMap::with_capacity(frames),
            frame_table: Vec::with_capacity(frames),
            rng,
            stats: MmuStats::default(),
            debug: DebugChannel::default(),
        })
    }

    /// Frame currently holding `page`
    pub fn frame_of(&self, page: PageNumber) -> Option<FrameId> {
        self.page_table.get(&page).map(|resident| resident.frame)
    }
}

impl<R: Rng> Mmu for RandomMmu<R> {
    fn access(&mut self, page: PageNumber, kind: AccessKind) {
        let is_write = kind.is_write();

        if let Some(resident) = self.page_table.get_mut(&page) {
            if is_write {
                resident.dirty = true;
            }
            let frame = resident.frame;
            self.debug.emit(MmuEvent::Hit { page, frame });
        } else {
            self.stats.record_fault();
            self.debug.emit(MmuEvent::Miss { page });

            if self.page_table.len() < self.capacity {
                let frame = self.frame_table.len();
                self.frame_table.push(page);
                self.page_table.insert(page, Resident { frame, dirty: is_write });
                self.debug.emit(MmuEvent::Allocated { page, frame });
            } else {
                let frame = self.rng.gen_range(0..self.frame_table.len());
                let victim = self.frame_table[frame];

                let dirty = self
                    .page_table
                    .remove(&victim)
                    .is_some_and(|resident| resident.dirty);
                if dirty {
                    self.stats.record_write_back();
                }
                self.debug.emit(MmuEvent::Evicted { page: victim, frame, dirty });

                self.frame_table[frame] = page;
                self.page_table.insert(page, Resident { frame, dirty: is_write });
                self.debug.emit(MmuEvent::Loaded { page, frame });
            }
        }

        self.debug.emit(MmuEvent::Accessed { page, kind });
    }

    fn stats(&self) -> MmuStats {
        self.stats
    }

    fn set_debug(&mut self) {
        self.debug.set_enabled(true);
    }

    fn reset_debug(&mut self) {
        self.debug.set_enabled(false);
    }

    fn is_debug(&self) -> bool {
        self.debug.is_enabled()
    }

    fn set_observer(&mut self, observer: Box<dyn MmuObserver>) {
        self.debug.set_observer(observer);
    }

    fn frame_count(&self) -> usize {
        self.capacity
    }

    fn resident_count(&self) -> usize {
        self.page_table.len()
    }

    fn is_resident(&self, page: PageNumber) -> bool {
        self.page_table.contains_key(&page)
    }

    fn is_dirty(&self, page: PageNumber) -> bool {
        self.page_table.get(&page).is_some_and(|resident| resident.dirty)
    }
}

use std::collections::HashMap;

use crate::common::types::{AccessKind, FrameId, PageNumber};
use crate::mmu::base::{Mmu, MmuStats};
use crate::mmu::error::MmuError;
use crate::mmu::observer::{DebugChannel, MmuEvent, MmuObserver};
use crate::mmu::recency::RecencyList;

/// Least Recently Used page replacement
pub struct LruMmu {
    capacity: usize,
    page_table: HashMap<PageNumber, FrameId>,
    recency: RecencyList,
    stats: MmuStats,
    debug: DebugChannel,
}

impl LruMmu {
    pub fn new(frames: usize) -> Result<Self, MmuError> {
        if frames == 0 {
            return Err(MmuError::InvalidFrameCount(frames));
        }

        Ok(Self {
            capacity: frames,
            page_table: HashMap::with_capacity(frames),
            recency: RecencyList::with_capacity(frames),
            stats: MmuStats::default(),
            debug: DebugChannel::default(),
        })
    }

    /// Resident pages ordered from least to most recently used
    pub fn recency_order(&self) -> Vec<PageNumber> {
        self.recency.pages()
    }

    /// Frame currently holding `page`
    pub fn frame_of(&self, page: PageNumber) -> Option<FrameId> {
        self.page_table.get(&page).copied()
    }
}

impl Mmu for LruMmu {
    fn access(&mut self, page: PageNumber, kind: AccessKind) {
        let is_write = kind.is_write();

        if let Some(&frame) = self.page_table.get(&page) {
            self.recency.touch(frame);
            if is_write {
                self.recency.mark_dirty(frame);
            }
            self.debug.emit(MmuEvent::Hit { page, frame });
        } else {
            self.stats.record_fault();
            self.debug.emit(MmuEvent::Miss { page });

            if self.page_table.len() < self.capacity {
                // Frames are handed out in order, so the next index is the resident count
                let frame = self.recency.push_new(page, is_write);
                self.page_table.insert(page, frame);
                self.debug.emit(MmuEvent::Allocated { page, frame });
            } else {
                let Some(victim) = self.recency.pop_least_recent() else {
                    unreachable!("a full LRU pool always has a least recently used page");
                };

                if victim.dirty {
                    self.stats.record_write_back();
                }
                self.page_table.remove(&victim.page);
                self.debug.emit(MmuEvent::Evicted {
                    page: victim.page,
                    frame: victim.frame,
                    dirty: victim.dirty,
                });

                self.recency.reuse(victim.frame, page, is_write);
                self.page_table.insert(page, victim.frame);
                self.debug.emit(MmuEvent::Loaded { page, frame: victim.frame });
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
        self.page_table
            .get(&page)
            .is_some_and(|&frame| self.recency.is_dirty(frame))
    }
}

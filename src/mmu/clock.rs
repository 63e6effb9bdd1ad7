use std::collections::HashMap;

use crate::common::types::{AccessKind, FrameId, PageNumber};
use crate::mmu::base::{Mmu, MmuStats};
use crate::mmu::error::MmuError;
use crate::mmu::observer::{DebugChannel, MmuEvent, MmuObserver};

/// Clock (second-chance) page replacement
pub struct ClockMmu {
    frame_table: Vec<Option<PageNumber>>,
    reference_bits: Vec<bool>,
    dirty_bits: Vec<bool>,
    page_table: HashMap<PageNumber, FrameId>,
    clock_hand: FrameId,
    stats: MmuStats,
    debug: DebugChannel,
}

impl ClockMmu {
    pub fn new(frames: usize) -> Result<Self, MmuError> {
        if frames == 0 {
            return Err(MmuError::InvalidFrameCount(frames));
        }

        Ok(Self {
            frame_table: vec![None; frames],
            reference_bits: vec![false; frames],
            dirty_bits: vec![false; frames],
            page_table: HashMap::with_capacity(frames),
            clock_hand: 0,
            stats: MmuStats::default(),
            debug: DebugChannel::default(),
        })
    }

    /// Position the hand will start the next victim search from
    pub fn clock_hand(&self) -> FrameId {
        self.clock_hand
    }

    /// Lowest frame index that holds no page
    fn free_frame(&self) -> Option<FrameId> {
        if self.page_table.len() == self.frame_table.len() {
            return None;
        }
        self.frame_table.iter().position(Option::is_none)
    }

    /// Sweep from the hand, clearing reference bits, until a frame with a
    /// clear bit is found. Terminates within one full sweep.
    fn find_victim(&mut self) -> FrameId {
        loop {
            let hand = self.clock_hand;
            if !self.reference_bits[hand] {
                return hand;
            }

            // Second chance
            self.reference_bits[hand] = false;
            self.clock_hand = (hand + 1) % self.frame_table.len();
        }
    }

    fn install(&mut self, frame: FrameId, page: PageNumber, is_write: bool) {
        self.frame_table[frame] = Some(page);
        self.page_table.insert(page, frame);
        self.reference_bits[frame] = true;
        self.dirty_bits[frame] = is_write;
    }
}

impl Mmu for ClockMmu {
    fn access(&mut self, page: PageNumber, kind: AccessKind) {
        let is_write = kind.is_write();

        if let Some(&frame) = self.page_table.get(&page) {
            self.reference_bits[frame] = true;
            if is_write {
                self.dirty_bits[frame] = true;
            }
            self.debug.emit(MmuEvent::Hit { page, frame });
        } else {
            self.stats.record_fault();
            self.debug.emit(MmuEvent::Miss { page });

            if let Some(frame) = self.free_frame() {
                self.install(frame, page, is_write);
                self.debug.emit(MmuEvent::Allocated { page, frame });
            } else {
                let frame = self.find_victim();
                let dirty = self.dirty_bits[frame];
                if dirty {
                    self.stats.record_write_back();
                }

                if let Some(victim) = self.frame_table[frame].take() {
                    self.page_table.remove(&victim);
                    self.debug.emit(MmuEvent::Evicted { page: victim, frame, dirty });
                }

                self.install(frame, page, is_write);
                self.debug.emit(MmuEvent::Loaded { page, frame });

                self.clock_hand = (frame + 1) % self.frame_table.len();
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
        self.frame_table.len()
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
            .is_some_and(|&frame| self.dirty_bits[frame])
    }
}

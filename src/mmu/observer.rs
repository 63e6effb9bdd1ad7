use std::fmt;

use crate::common::types::{AccessKind, FrameId, PageNumber};

/// A decision taken by an MMU while handling an access
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MmuEvent {
    /// The page was already resident
    Hit { page: PageNumber, frame: FrameId },
    /// The page was not resident
    Miss { page: PageNumber },
    /// The faulting page was placed in a free frame
    Allocated { page: PageNumber, frame: FrameId },
    /// A resident page was chosen as victim
    Evicted { page: PageNumber, frame: FrameId, dirty: bool },
    /// The faulting page replaced the victim
    Loaded { page: PageNumber, frame: FrameId },
    /// The access completed
    Accessed { page: PageNumber, kind: AccessKind },
}

impl fmt::Display for MmuEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MmuEvent::Hit { page, frame } => write!(f, "[HIT] Page {} in frame {}", page, frame),
            MmuEvent::Miss { page } => write!(f, "[MISS] Page fault on {}", page),
            MmuEvent::Allocated { page, frame } => {
                write!(f, " - Allocated page {} to free frame {}", page, frame)
            }
            MmuEvent::Evicted { page, frame, dirty: true } => {
                write!(f, " - Evicting dirty page {} from frame {} (disk write)", page, frame)
            }
            MmuEvent::Evicted { page, frame, dirty: false } => {
                write!(f, " - Evicting clean page {} from frame {} (discarded)", page, frame)
            }
            MmuEvent::Loaded { page, frame } => {
                write!(f, " - Loaded new page {} into frame {}", page, frame)
            }
            MmuEvent::Accessed { page, kind: AccessKind::Read } => {
                write!(f, " - Read from page {}", page)
            }
            MmuEvent::Accessed { page, kind: AccessKind::Write } => {
                write!(f, " - Write to page {}", page)
            }
        }
    }
}

/// Receives the decision trace of an MMU in debug mode
pub trait MmuObserver {
    fn notify(&mut self, event: &MmuEvent);
}

/// Forwards events to the `log` facade at debug level
#[derive(Debug, Default)]
pub struct LogObserver;

impl MmuObserver for LogObserver {
    fn notify(&mut self, event: &MmuEvent) {
        log::debug!("{}", event);
    }
}

/// Prints events to stdout
#[derive(Debug, Default)]
pub struct PrintObserver;

impl MmuObserver for PrintObserver {
    fn notify(&mut self, event: &MmuEvent) {
        println!("{}", event);
    }
}

/// Debug toggle plus the observer it feeds
pub(crate) struct DebugChannel {
    enabled: bool,
    observer: Box<dyn MmuObserver>,
}

impl DebugChannel {
    pub(crate) fn emit(&mut self, event: MmuEvent) {
        if self.enabled {
            self.observer.notify(&event);
        }
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn set_observer(&mut self, observer: Box<dyn MmuObserver>) {
        self.observer = observer;
    }
}

impl Default for DebugChannel {
    fn default() -> Self {
        Self {
            enabled: false,
            observer: Box::new(LogObserver),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{MmuEvent, MmuObserver};

    /// Collects events into a shared vector
    #[derive(Default, Clone)]
    pub(crate) struct RecordingObserver {
        pub(crate) events: Rc<RefCell<Vec<MmuEvent>>>,
    }

    impl MmuObserver for RecordingObserver {
        fn notify(&mut self, event: &MmuEvent) {
            self.events.borrow_mut().push(event.clone());
        }
    }
}

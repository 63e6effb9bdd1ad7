use std::fmt;

/// Virtual page number type
pub type PageNumber = u64;

/// Physical frame index type
pub type FrameId = usize;

/// Default page offset in bits (4KB pages)
pub const DEFAULT_PAGE_OFFSET: u32 = 12;

/// Kind of memory access recorded in a trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessKind {
    Read,
    Write,
}

impl AccessKind {
    pub fn is_write(self) -> bool {
        matches!(self, AccessKind::Write)
    }
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessKind::Read => write!(f, "R"),
            AccessKind::Write => write!(f, "W"),
        }
    }
}

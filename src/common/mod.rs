pub mod types;

pub use types::{AccessKind, FrameId, PageNumber, DEFAULT_PAGE_OFFSET};

pub mod base;
pub mod clock;
pub mod error;
pub mod lru;
pub mod observer;
pub mod policy;
pub mod random;
mod recency;

pub use base::{Mmu, MmuStats};
pub use clock::ClockMmu;
pub use error::MmuError;
pub use lru::LruMmu;
pub use observer::{LogObserver, MmuEvent, MmuObserver, PrintObserver};
pub use policy::Policy;
pub use random::RandomMmu;

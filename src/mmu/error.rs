use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MmuError {
    #[error("Frame count must be positive, got {0}")]
    InvalidFrameCount(usize),
    #[error("Unknown replacement policy '{0}' (valid options are clock, lru, rand)")]
    UnknownPolicy(String),
}

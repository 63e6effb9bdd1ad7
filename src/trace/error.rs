use thiserror::Error;

#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Badly formatted trace: missing operation on line {line}")]
    MissingOperation { line: usize },
    #[error("Badly formatted trace: unknown operation '{op}' on line {line}")]
    UnknownOperation { line: usize, op: String },
    #[error("Badly formatted trace: invalid address '{address}' on line {line}")]
    InvalidAddress { line: usize, address: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub mod error;
pub mod reader;

pub use error::TraceError;
pub use reader::{TraceEvent, TraceReader, open_trace, parse_line};

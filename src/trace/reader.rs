use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::common::types::{AccessKind, PageNumber};
use crate::trace::error::TraceError;

/// A single access extracted from a trace line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEvent {
    pub page: PageNumber,
    pub kind: AccessKind,
}

/// Parse one `<hex address> <R|W>` line.
///
/// `line_no` is only used for error reporting. The page number is the
/// address shifted right by `page_offset` bits.
pub fn parse_line(line: &str, line_no: usize, page_offset: u32) -> Result<TraceEvent, TraceError> {
    let mut fields = line.split_whitespace();

    let raw_address = fields.next().unwrap_or_default();
    let digits = raw_address
        .strip_prefix("0x")
        .or_else(|| raw_address.strip_prefix("0X"))
        .unwrap_or(raw_address);
    let address = u64::from_str_radix(digits, 16).map_err(|_| TraceError::InvalidAddress {
        line: line_no,
        address: raw_address.to_string(),
    })?;

    let kind = match fields.next() {
        Some("R") | Some("r") => AccessKind::Read,
        Some("W") | Some("w") => AccessKind::Write,
        Some(op) => {
            return Err(TraceError::UnknownOperation {
                line: line_no,
                op: op.to_string(),
            });
        }
        None => return Err(TraceError::MissingOperation { line: line_no }),
    };

    Ok(TraceEvent {
        page: address.checked_shr(page_offset).unwrap_or(0),
        kind,
    })
}

/// Streams trace events from a buffered reader, skipping blank lines
pub struct TraceReader<R: BufRead> {
    lines: Lines<R>,
    line_no: usize,
    page_offset: u32,
}

impl<R: BufRead> TraceReader<R> {
    pub fn new(reader: R, page_offset: u32) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            page_offset,
        }
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<TraceEvent, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(TraceError::Io(e))),
            };
            self.line_no += 1;

            if line.trim().is_empty() {
                continue;
            }
            return Some(parse_line(&line, self.line_no, self.page_offset));
        }
    }
}

/// Open a trace file for streaming
pub fn open_trace(path: impl AsRef<Path>, page_offset: u32) -> Result<TraceReader<BufReader<File>>, TraceError> {
    let file = File::open(path)?;
    Ok(TraceReader::new(BufReader::new(file), page_offset))
}

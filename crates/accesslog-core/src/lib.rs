//! accesslog-core: record types and the combined log line parser.
//!
//! # Architecture
//!
//! ```text
//! Source ──► lines ──► LineParser ──► Vec<LogRecord>
//! ```
//!
//! Each line is parsed independently; nothing is carried from one line to
//! the next.

pub mod config;
pub mod parser;
pub mod types;

pub use parser::{
    parse_line, parse_lines, try_parse_line, LineParser, ParseError, TIMESTAMP_FORMAT,
};
pub use types::LogRecord;

//! accesslog: parse Apache/NCSA combined access logs.
//!
//! This crate ties the two layers together and re-exports them so that
//! integration tests and the `accesslog` binary can import everything from
//! one place.
//!
//! # Architecture
//!
//! ```text
//! path ──► accesslog-source ──► lines ──► accesslog-core ──► Vec<LogRecord>
//! ```
//!
//! ```no_run
//! let records = accesslog::parse_file("/var/log/apache2/access.log.1.gz")?;
//! for record in records.iter().filter(|r| r.is_matched()) {
//!     println!("{} {}", record.remote_host, record.url);
//! }
//! # Ok::<(), accesslog::SourceError>(())
//! ```

pub use accesslog_core::config;
pub use accesslog_core::{
    parse_line, parse_lines, try_parse_line, LineParser, LogRecord, ParseError, TIMESTAMP_FORMAT,
};
pub use accesslog_source::{read_lines, SourceError, SourceKind};

/// Read `path` (plain, `.gz`, `.tar.gz` or `.tgz`) and parse every line.
///
/// The result has one record per line, in file order. Lines that do not match
/// the combined log format come back as [`LogRecord::default`]. Read failures
/// are returned rather than aborting the process.
pub fn parse_file(path: impl AsRef<std::path::Path>) -> Result<Vec<LogRecord>, SourceError> {
    let lines = read_lines(path)?;
    Ok(parse_lines(&lines))
}

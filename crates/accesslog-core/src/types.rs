//! Core types for accesslog-core.
//!
//! This module defines [`LogRecord`], the structured form of one combined-log
//! line, and its tab-separated [`Display`](std::fmt::Display) rendering.

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

/// One parsed access-log line.
///
/// Every field has a well-defined empty value, so a record is always
/// produced even for lines that only partially match the grammar. A record
/// whose `remote_host` is empty came from a line that did not match at all
/// (see [`LogRecord::is_matched`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// Client IP address or hostname.
    pub remote_host: String,
    /// Request time with the offset written in the log. The Unix epoch at
    /// `+00:00` when the bracketed timestamp could not be parsed.
    pub timestamp: DateTime<FixedOffset>,
    /// Reconstructed as `method + " " + url + " " + protocol`.
    pub request_line: String,
    pub status: i64,
    pub bytes_sent: i64,
    /// Referer header, kept verbatim (often the literal `-`).
    pub referer: String,
    pub user_agent: String,
    pub url: String,
    /// HTTP method, empty when the request area had no leading token.
    pub method: String,
    /// Protocol token such as `HTTP/1.1`, empty for protocol-less requests.
    pub protocol: String,
}

/// The timestamp carried by records whose time field did not parse.
pub fn epoch() -> DateTime<FixedOffset> {
    DateTime::<Utc>::UNIX_EPOCH.fixed_offset()
}

impl Default for LogRecord {
    fn default() -> Self {
        Self {
            remote_host: String::new(),
            timestamp: epoch(),
            request_line: String::new(),
            status: 0,
            bytes_sent: 0,
            referer: String::new(),
            user_agent: String::new(),
            url: String::new(),
            method: String::new(),
            protocol: String::new(),
        }
    }
}

impl LogRecord {
    /// `false` for the all-empty record returned when a line does not match
    /// the combined-log grammar.
    pub fn is_matched(&self) -> bool {
        !self.remote_host.is_empty()
    }
}

impl std::fmt::Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.remote_host,
            self.timestamp,
            self.request_line,
            self.status,
            self.bytes_sent,
            self.referer,
            self.user_agent,
            self.url,
            self.method,
            self.protocol,
        )
    }
}

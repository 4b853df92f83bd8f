//! Line parser: turns one combined-log line into a [`LogRecord`].
//!
//! The grammar is a single anchored regular expression with ten capture
//! groups. It is compiled once per [`LineParser`]; the free functions
//! [`parse_line`] and [`try_parse_line`] share a lazily built process-wide
//! instance.
//!
//! Parsing is lenient at the field level: a status or byte count that is not
//! an integer becomes `0` ([`lenient_int`]) and a timestamp that does not
//! parse becomes the Unix epoch ([`lenient_timestamp`]). A line that does not
//! match the grammar at all yields [`LogRecord::default`] from [`parse_line`]
//! and [`ParseError::NoMatch`] from [`try_parse_line`].

use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::types::{epoch, LogRecord};

// ---------------------------------------------------------------------------
// Grammar
// ---------------------------------------------------------------------------

// `\s` and `\S` are spelled out as ASCII classes so that NBSP, em-space and
// other Unicode spaces stay inside the token they appear in.
macro_rules! ws {
    () => {
        r"[\t\n\f\r ]"
    };
}
macro_rules! non_ws {
    () => {
        r"[^\t\n\f\r ]"
    };
}

const HOST: &str = concat!("^(", non_ws!(), "+)", ws!());
const LOGNAME: &str = concat!(non_ws!(), "+", ws!(), "+");
const REMOTE_USER: &str = concat!("(?:", non_ws!(), "+", ws!(), "+)+");
const TIME: &str = concat!(r"\[([^\]]+)\]", ws!());
const METHOD: &str = concat!(r#""("#, non_ws!(), "*)", ws!(), "?");
const URL: &str = concat!(r#"(?:((?:[^"]*(?:\\")?)*)"#, ws!());
const PROTOCOL: &str = concat!(r#"([^"]*)""#, ws!(), "|");
const BARE_URL: &str = concat!(r#"((?:[^"]*(?:\\")?)*)""#, ws!(), ")");
const STATUS: &str = concat!("(", non_ws!(), "+)", ws!());
const BYTES: &str = concat!("(", non_ws!(), "+)", ws!());
const REFERER: &str = concat!(r#""((?:[^"]*(?:\\")?)*)""#, ws!());
const USER_AGENT: &str = r#""(.*)"$"#;

/// `strftime` layout of the bracketed field, e.g. `05/Oct/2014:04:34:35 -0500`.
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

// Capture group indices.
const G_HOST: usize = 1;
const G_TIME: usize = 2;
const G_METHOD: usize = 3;
const G_URL: usize = 4;
const G_PROTOCOL: usize = 5;
const G_BARE_URL: usize = 6;
const G_STATUS: usize = 7;
const G_BYTES: usize = 8;
const G_REFERER: usize = 9;
const G_USER_AGENT: usize = 10;

/// The full combined-log pattern, assembled from its parts.
fn pattern() -> String {
    [
        HOST, LOGNAME, REMOTE_USER, TIME, METHOD, URL, PROTOCOL, BARE_URL, STATUS, BYTES,
        REFERER, USER_AGENT,
    ]
    .concat()
}

static DEFAULT_PARSER: Lazy<LineParser> = Lazy::new(LineParser::new);

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Returned by the strict parsing entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("line does not match the combined log format")]
    NoMatch,
}

// ---------------------------------------------------------------------------
// LineParser
// ---------------------------------------------------------------------------

/// Compiled combined-log matcher. Cheap to clone and safe to share across
/// threads; each call to [`LineParser::parse`] is independent.
#[derive(Debug, Clone)]
pub struct LineParser {
    regex: Regex,
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser {
    pub fn new() -> Self {
        let regex = Regex::new(&pattern()).expect("combined log pattern must compile");
        Self { regex }
    }

    /// Parse one line, returning the all-empty record when the line does not
    /// match the grammar.
    pub fn parse(&self, line: &str) -> LogRecord {
        self.try_parse(line).unwrap_or_default()
    }

    /// Parse one line, failing only when the grammar does not match at all.
    /// Unparseable numbers and timestamps still fall back to their defaults.
    pub fn try_parse(&self, line: &str) -> Result<LogRecord, ParseError> {
        match self.regex.captures(line) {
            Some(caps) => Ok(record_from(&caps)),
            None => {
                tracing::trace!(line, "line does not match combined log format");
                Err(ParseError::NoMatch)
            }
        }
    }
}

fn record_from(caps: &Captures<'_>) -> LogRecord {
    let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());

    let method = group(G_METHOD);
    let protocol = group(G_PROTOCOL);
    let url = match (group(G_URL), group(G_BARE_URL)) {
        ("", bare) if !bare.is_empty() => bare,
        (url, _) => url,
    };

    LogRecord {
        remote_host: group(G_HOST).to_string(),
        timestamp: lenient_timestamp(group(G_TIME)),
        request_line: format!("{method} {url} {protocol}"),
        status: lenient_int(group(G_STATUS)),
        bytes_sent: lenient_int(group(G_BYTES)),
        referer: group(G_REFERER).to_string(),
        user_agent: group(G_USER_AGENT).to_string(),
        url: url.to_string(),
        method: method.to_string(),
        protocol: protocol.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Leniency
// ---------------------------------------------------------------------------

/// Parse an integer field, yielding `0` for anything that is not a decimal
/// integer in range (`-`, empty, overflow, trailing garbage).
pub fn lenient_int<T>(value: &str) -> T
where
    T: std::str::FromStr + Default,
{
    value.parse().unwrap_or_default()
}

/// Parse the bracketed timestamp, yielding the Unix epoch on failure.
pub fn lenient_timestamp(value: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_str(value, TIMESTAMP_FORMAT).unwrap_or_else(|_| epoch())
}

// ---------------------------------------------------------------------------
// Free functions over the shared parser
// ---------------------------------------------------------------------------

/// Parse one line with the process-wide parser. Never fails; see
/// [`LogRecord::is_matched`] to detect a grammar mismatch.
pub fn parse_line(line: &str) -> LogRecord {
    DEFAULT_PARSER.parse(line)
}

/// Strict form of [`parse_line`].
pub fn try_parse_line(line: &str) -> Result<LogRecord, ParseError> {
    DEFAULT_PARSER.try_parse(line)
}

/// Parse every line in order. The output has exactly one record per input
/// line.
pub fn parse_lines<I, S>(lines: I) -> Vec<LogRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| DEFAULT_PARSER.parse(line.as_ref()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

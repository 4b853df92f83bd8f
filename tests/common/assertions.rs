//! Record assertion macros for accesslog harnesses.
//!
//! These wrap `pretty_assertions` and name the field that differed, along
//! with the input line, so a failure points straight at the grammar case.

/// Assert the request fields of a parsed line.
///
/// ```rust
/// assert_request!(record, "GET", "/index.html", "HTTP/1.1", line);
/// ```
#[macro_export]
macro_rules! assert_request {
    ($record:expr, $method:expr, $url:expr, $protocol:expr, $line:expr) => {{
        let record: &accesslog::LogRecord = &$record;
        let line: &str = $line;
        pretty_assertions::assert_eq!(record.method, $method, "method of {:?}", line);
        pretty_assertions::assert_eq!(record.url, $url, "url of {:?}", line);
        pretty_assertions::assert_eq!(record.protocol, $protocol, "protocol of {:?}", line);
    }};
}

/// Assert that a record is the all-empty record produced for a line that did
/// not match the grammar.
#[macro_export]
macro_rules! assert_unmatched {
    ($record:expr, $line:expr) => {{
        let record: &accesslog::LogRecord = &$record;
        if record.is_matched() {
            panic!(
                "assert_unmatched! failed: line matched the grammar.\n  line: {:?}\n  host: {:?}",
                $line, record.remote_host
            );
        }
        pretty_assertions::assert_eq!(*record, accesslog::LogRecord::default());
    }};
}

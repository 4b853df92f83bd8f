//! Static log corpora used across harnesses.

use accesslog::{LogRecord, TIMESTAMP_FORMAT};

/// The reference combined-log line.
pub const SAMPLE: &str = r#"127.0.0.1 - - [05/Oct/2014:04:34:35 -0500] "GET /test.html HTTP/1.1" 200 6776 "http://www.example.com/index.html" "Mozilla/5.0""#;

/// Well-formed combined-log lines with a variety of methods, offsets and
/// agents.
pub const CORPUS_COMBINED: &[&str] = &[
    r#"127.0.0.1 - - [05/Oct/2014:04:34:35 -0500] "GET /test.html HTTP/1.1" 200 6776 "http://www.example.com/index.html" "Mozilla/5.0 (Windows NT 6.1; WOW64; rv:32.0) Gecko/20100101 Firefox/32.0""#,
    r#"192.168.1.1 - - [10/Oct/2014:13:55:36 -0700] "POST /api/data HTTP/1.1" 201 1234 "-" "curl/7.35.0""#,
    r#"10.0.0.1 - - [15/Oct/2014:08:22:15 +0000] "PUT /upload/file.txt HTTP/1.1" 204 0 "https://example.com/upload" "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_9_5)""#,
    r#"172.16.0.1 - - [20/Oct/2014:16:45:22 -0500] "DELETE /resource/123 HTTP/1.1" 404 512 "-" "Python-urllib/3.4""#,
    r#"192.168.0.100 - - [25/Oct/2014:09:12:33 +0100] "GET /images/logo.png HTTP/1.0" 304 0 "http://www.site.com/" "Mozilla/5.0 (iPhone; CPU iPhone OS 8_0)""#,
];

/// Expected `(remote_host, method, url, protocol, status, bytes_sent)` for
/// each line of [`CORPUS_COMBINED`].
pub const CORPUS_COMBINED_EXPECTED: &[(&str, &str, &str, &str, i64, i64)] = &[
    ("127.0.0.1", "GET", "/test.html", "HTTP/1.1", 200, 6776),
    ("192.168.1.1", "POST", "/api/data", "HTTP/1.1", 201, 1234),
    ("10.0.0.1", "PUT", "/upload/file.txt", "HTTP/1.1", 204, 0),
    ("172.16.0.1", "DELETE", "/resource/123", "HTTP/1.1", 404, 512),
    ("192.168.0.100", "GET", "/images/logo.png", "HTTP/1.0", 304, 0),
];

/// Lines that do not match the combined log grammar at all.
pub const CORPUS_UNMATCHED: &[&str] = &[
    "",
    "   ",
    "Jan 15 10:00:02 myhost sshd[12345]: Failed password for invalid user admin",
    r#"{"ts":"2024-01-15T10:00:00Z","level":"INFO","message":"Server started"}"#,
    r#"127.0.0.1 - - [05/Oct/2014:04:34:35 -0500] "GET / HTTP/1.1" 200 6776"#,
];

/// Render a record back into a combined-log line.
pub fn format_line(record: &LogRecord) -> String {
    format!(
        r#"{} - - [{}] "{} {} {}" {} {} "{}" "{}""#,
        record.remote_host,
        record.timestamp.format(TIMESTAMP_FORMAT),
        record.method,
        record.url,
        record.protocol,
        record.status,
        record.bytes_sent,
        record.referer,
        record.user_agent,
    )
}

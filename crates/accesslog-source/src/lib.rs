//! accesslog-source: turns a log file path into an ordered list of lines.
//!
//! The encoding is inferred from the path suffix alone (see [`SourceKind`]).
//! Plain text is read as is, `.gz` files are decompressed, and `.tar.gz` /
//! `.tgz` archives are decompressed and the first regular file inside is
//! read.

pub mod kind;
pub mod reader;

pub use kind::SourceKind;
pub use reader::{read_lines, SourceError};

//! Suffix-based detection of how a log file is encoded.

use std::path::Path;

/// Reading strategy for a log file, chosen purely from its path suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Uncompressed text.
    Plain,
    /// A single gzip stream of text (`.gz`).
    Gzip,
    /// A gzip-compressed tar archive (`.tar.gz`, `.tgz`).
    TarGzip,
}

impl SourceKind {
    /// Matching is case-sensitive and looks only at the path text; the file
    /// contents are never sniffed.
    pub fn from_path(path: &Path) -> Self {
        let name = path.to_string_lossy();
        if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            SourceKind::TarGzip
        } else if name.ends_with(".gz") {
            SourceKind::Gzip
        } else {
            SourceKind::Plain
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Plain => write!(f, "plain"),
            SourceKind::Gzip => write!(f, "gzip"),
            SourceKind::TarGzip => write!(f, "tar.gz"),
        }
    }
}

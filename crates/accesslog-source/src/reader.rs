//! Line reading for plain, gzip and tar.gz log files.
//!
//! Every reader in here is owned by the function that opens it, so the file
//! handle and any decoders are dropped on every return path, including the
//! early return after the first tar entry.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;

use crate::kind::SourceKind;

/// Failure to turn a path into lines.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    /// Decompression, archive or read error after the file was opened.
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("unable to parse file {}: archive has no regular file entry", .path.display())]
    NoRegularFile { path: PathBuf },
}

impl SourceError {
    pub fn path(&self) -> &Path {
        match self {
            SourceError::Open { path, .. }
            | SourceError::Read { path, .. }
            | SourceError::NoRegularFile { path } => path,
        }
    }
}

/// Read all lines from `path`, decompressing according to its suffix.
///
/// - `.tar.gz` / `.tgz`: only the first regular file in the archive is read.
/// - `.gz`: the whole (possibly multi-member) gzip stream is read.
/// - anything else: plain text.
///
/// Reaching end of input is not an error; an empty file yields no lines.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, SourceError> {
    let path = path.as_ref();
    let kind = SourceKind::from_path(path);
    tracing::debug!(path = %path.display(), %kind, "reading log source");

    let file = File::open(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let lines = match kind {
        SourceKind::Plain => scan_lines(BufReader::new(file)).map_err(read_error(path))?,
        SourceKind::Gzip => {
            scan_lines(BufReader::new(MultiGzDecoder::new(file))).map_err(read_error(path))?
        }
        SourceKind::TarGzip => first_regular_entry(MultiGzDecoder::new(file), path)?,
    };

    tracing::debug!(path = %path.display(), lines = lines.len(), "read log source");
    Ok(lines)
}

fn read_error(path: &Path) -> impl Fn(io::Error) -> SourceError + '_ {
    move |source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    }
}

fn first_regular_entry<R: Read>(reader: R, path: &Path) -> Result<Vec<String>, SourceError> {
    let mut archive = tar::Archive::new(reader);

    for entry in archive.entries().map_err(read_error(path))? {
        let entry = entry.map_err(read_error(path))?;
        let entry_type = entry.header().entry_type();
        if !entry_type.is_file() {
            tracing::trace!(?entry_type, "skipping non-regular tar entry");
            continue;
        }

        tracing::debug!(
            entry = %String::from_utf8_lossy(&entry.path_bytes()),
            "reading first regular tar entry"
        );
        return scan_lines(BufReader::new(entry)).map_err(read_error(path));
    }

    Err(SourceError::NoRegularFile {
        path: path.to_path_buf(),
    })
}

/// Split `reader` into lines on `\n`, dropping one trailing `\r` per line.
/// A final line without a newline is kept. Invalid UTF-8 is replaced
/// lossily.
pub(crate) fn scan_lines<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }

    Ok(lines)
}

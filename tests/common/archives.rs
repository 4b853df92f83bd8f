//! Builders for fixture log files: plain, gzip and tar.gz.
//!
//! These panic on I/O failure rather than returning `Result`; they are only
//! ever pointed at a fresh `tempfile::TempDir`.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// One member of a fixture tar archive.
pub enum TarEntry<'a> {
    Dir(&'a str),
    File(&'a str, &'a str),
    Symlink(&'a str, &'a str),
}

/// Write `lines` joined with `\n` (and a trailing newline) to `dir/name`.
pub fn write_plain(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, join_lines(lines)).unwrap();
    path
}

/// Gzip `content` into `dir/name`.
pub fn write_gzip(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::fast());
    encoder.write_all(content.as_bytes()).unwrap();
    encoder.finish().unwrap();
    path
}

/// Build a gzip-compressed tar archive at `dir/name` holding `entries` in
/// order.
pub fn write_tar_gz(dir: &Path, name: &str, entries: &[TarEntry<'_>]) -> PathBuf {
    let path = dir.join(name);
    let encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::fast());
    let mut builder = tar::Builder::new(encoder);

    for entry in entries {
        let mut header = tar::Header::new_gnu();
        header.set_mode(0o644);
        match entry {
            TarEntry::Dir(name) => {
                header.set_entry_type(tar::EntryType::Directory);
                header.set_mode(0o755);
                header.set_size(0);
                builder.append_data(&mut header, name, std::io::empty()).unwrap();
            }
            TarEntry::File(name, content) => {
                header.set_entry_type(tar::EntryType::Regular);
                header.set_size(content.len() as u64);
                builder
                    .append_data(&mut header, name, content.as_bytes())
                    .unwrap();
            }
            TarEntry::Symlink(name, target) => {
                header.set_entry_type(tar::EntryType::Symlink);
                header.set_size(0);
                header.set_link_name(target).unwrap();
                builder.append_data(&mut header, name, std::io::empty()).unwrap();
            }
        }
    }

    builder.into_inner().unwrap().finish().unwrap();
    path
}

pub fn join_lines(lines: &[&str]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// A single measured filesystem entry.
///
/// Records are created once during the walk, held in a flat `Vec` for the
/// duration of the run, and never mutated afterwards. Both chart builders
/// consume the same record slice.
use crate::model::size::bytes_to_mb;
use std::path::PathBuf;

/// Classification of a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
}

/// One (path, size, kind) measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageRecord {
    /// Full path of the entry as encountered by the walk.
    pub path: PathBuf,

    /// Size in megabytes (bytes / 1_048_576), always >= 0.
    ///
    /// For `Directory` records this is the sum of the immediate *file*
    /// children only — nested subdirectory contents are not included.
    pub size_mb: f64,

    /// Whether this entry is a file or a directory.
    pub kind: EntryKind,
}

impl UsageRecord {
    /// Create a file record from a byte count.
    pub fn file(path: PathBuf, bytes: u64) -> Self {
        Self {
            path,
            size_mb: bytes_to_mb(bytes),
            kind: EntryKind::File,
        }
    }

    /// Create a directory record from the byte sum of its immediate files.
    pub fn directory(path: PathBuf, bytes: u64) -> Self {
        Self {
            path,
            size_mb: bytes_to_mb(bytes),
            kind: EntryKind::Directory,
        }
    }
}

//! File records produced by enumeration.

use std::path::{Path, PathBuf};

/// A regular file and its size, as seen at enumeration time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileRecord {
    /// Path used to open the file for sampling.
    pub path: PathBuf,
    /// Size in bytes.
    pub size: u64,
}

impl FileRecord {
    /// Creates a new file record.
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the file holds no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }
}

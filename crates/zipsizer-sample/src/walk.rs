//! Stable-order enumeration of regular files.

use std::path::Path;

use tracing::warn;
use walkdir::WalkDir;
use zipsizer_types::FileRecord;

/// Iterator over every regular file under a root, in file-name order.
///
/// Symlinks are neither followed nor yielded. Entries that cannot be read
/// are logged and skipped; [`FileWalker::skipped`] counts them.
#[derive(Debug)]
pub struct FileWalker {
    inner: walkdir::IntoIter,
    skipped: u64,
}

impl FileWalker {
    /// Starts a walk at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let inner = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();
        Self { inner, skipped: 0 }
    }

    /// Returns the number of entries skipped so far.
    #[must_use]
    pub const fn skipped(&self) -> u64 {
        self.skipped
    }
}

impl Iterator for FileWalker {
    type Item = FileRecord;

    fn next(&mut self) -> Option<FileRecord> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    self.skipped += 1;
                    let path = e.path().map(|p| p.display().to_string());
                    warn!(path = path.as_deref().unwrap_or("<unknown>"), error = %e, "skipping entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            match entry.metadata() {
                Ok(metadata) => return Some(FileRecord::new(entry.into_path(), metadata.len())),
                Err(e) => {
                    self.skipped += 1;
                    warn!(path = %entry.path().display(), error = %e, "skipping entry");
                }
            }
        }
    }
}

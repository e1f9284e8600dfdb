//! Virtual-concatenation sampler.
//!
//! Files are treated as one logical stream in enumeration order. The sampler
//! keeps a cursor at the end of the last consumed file and the next pending
//! sample point; both only move forward. A file is opened only when the
//! pending point falls inside it, under half-open `[start, start + size)`
//! semantics.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use zipsizer_types::{FileRecord, Result, SampleWindow, SizerError, Stage};

use crate::SamplePoints;

/// Counters collected while sampling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSummary {
    /// Exact sum of every record's size.
    pub total_size: u64,
    /// Records consumed.
    pub files: u64,
    /// Records that held at least one sample point and were opened.
    pub files_opened: u64,
    /// Non-empty windows emitted.
    pub samples: u64,
    /// Bytes emitted across all windows.
    pub sampled_bytes: u64,
}

/// Reads sample windows out of a sequence of files.
#[derive(Debug)]
pub struct VirtualSampler {
    window: SampleWindow,
    points: SamplePoints,
    offset: u64,
    buf: Vec<u8>,
    summary: SampleSummary,
}

impl VirtualSampler {
    /// Creates a sampler that copies windows through a `block_size` buffer.
    #[must_use]
    pub fn new(window: SampleWindow, block_size: usize) -> Self {
        let cap = usize::try_from(window.sample_size()).unwrap_or(usize::MAX);
        let block_size = block_size.clamp(1, cap);
        Self {
            window,
            points: SamplePoints::new(window),
            offset: 0,
            buf: vec![0; block_size],
            summary: SampleSummary::default(),
        }
    }

    /// Returns the logical offset where the next record starts.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the next sample point still to be satisfied.
    #[must_use]
    pub const fn next_point(&self) -> Option<u64> {
        self.points.peek()
    }

    /// Consumes one record, writing every window that starts inside it.
    ///
    /// A window is cut short at the end of its file.
    ///
    /// # Errors
    ///
    /// Returns [`SizerError::SampleRead`] if the file cannot be opened, sought
    /// or read, and [`SizerError::StreamIo`] if `out` rejects a write.
    pub fn feed<W: Write>(&mut self, record: &FileRecord, out: &mut W) -> Result<()> {
        let start = self.offset;
        let end = start.saturating_add(record.size);
        self.summary.files += 1;
        self.summary.total_size = end;
        self.offset = end;

        if record.is_empty() || !self.points.next_before(end) {
            return Ok(());
        }

        let path = record.path();
        let mut file = File::open(path).map_err(|e| SizerError::sample_read(path, e))?;
        self.summary.files_opened += 1;
        debug!(path = %path.display(), size = record.size, start, "sampling file");

        while self.points.next_before(end) {
            let Some(point) = self.points.next() else {
                break;
            };
            let local = point - start;
            file.seek(SeekFrom::Start(local))
                .map_err(|e| SizerError::sample_read(path, e))?;

            let copied = self.copy_window(&mut file, path, out)?;
            trace!(point, local, copied, "sample window");
            if copied > 0 {
                self.summary.samples += 1;
                self.summary.sampled_bytes += copied;
            }
        }

        Ok(())
    }

    /// Copies up to one sample size of bytes from `file` into `out`.
    fn copy_window<W: Write>(&mut self, file: &mut File, path: &Path, out: &mut W) -> Result<u64> {
        let mut remaining = self.window.sample_size();
        let mut copied = 0;

        while remaining > 0 {
            let want = remaining.min(self.buf.len() as u64) as usize;
            let n = match file.read(&mut self.buf[..want]) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(SizerError::sample_read(path, e)),
            };
            out.write_all(&self.buf[..n])
                .map_err(|e| SizerError::stream_io(Stage::Sample, e))?;
            remaining -= n as u64;
            copied += n as u64;
        }

        Ok(copied)
    }

    /// Finishes sampling and returns the collected counters.
    ///
    /// `total_size` is exact once every record has been fed.
    #[must_use]
    pub fn finish(self) -> SampleSummary {
        self.summary
    }

    /// Feeds every record in order, then finishes.
    ///
    /// # Errors
    ///
    /// Stops at the first error returned by [`VirtualSampler::feed`].
    pub fn run<I, W>(mut self, records: I, out: &mut W) -> Result<SampleSummary>
    where
        I: IntoIterator<Item = FileRecord>,
        W: Write,
    {
        for record in records {
            self.feed(&record, out)?;
        }
        out.flush()
            .map_err(|e| SizerError::stream_io(Stage::Sample, e))?;
        Ok(self.finish())
    }
}

//! Estimation results.

use std::path::PathBuf;

use serde::Serialize;
use zipsizer_compress::CompressionStats;
use zipsizer_sample::SampleSummary;
use zipsizer_types::{Codec, Result, SizerError};

/// Outcome of one estimation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    /// Directory that was estimated, if the run walked one.
    pub root: Option<PathBuf>,
    /// Exact sum of all file sizes.
    pub total_size: u64,
    /// `total_size` scaled by the sampled compression ratio.
    pub estimated_size: u64,
    /// Compressed bytes per sampled byte.
    pub ratio: f64,
    /// Codec used for the measurement.
    pub codec: Codec,
    /// Compression level used for the measurement.
    pub level: u32,
    /// Sampler counters.
    pub sample: SampleSummary,
    /// Compressor counters.
    pub compression: CompressionStats,
    /// Entries the walker could not read.
    pub skipped_entries: u64,
}

impl Estimate {
    /// Builds an estimate from the counters of a finished run.
    ///
    /// # Errors
    ///
    /// Returns [`SizerError::DegenerateRatio`] if nothing was sampled.
    pub fn new(
        codec: Codec,
        level: u32,
        sample: SampleSummary,
        compression: CompressionStats,
    ) -> Result<Self> {
        let ratio = ratio_for(sample.total_size, &compression)?;
        Ok(Self {
            root: None,
            total_size: sample.total_size,
            estimated_size: scale(sample.total_size, ratio),
            ratio,
            codec,
            level,
            sample,
            compression,
            skipped_entries: 0,
        })
    }

    /// Records the directory the estimate was taken from.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Records how many entries enumeration skipped.
    #[must_use]
    pub fn with_skipped_entries(mut self, skipped: u64) -> Self {
        self.skipped_entries = skipped;
        self
    }

    /// Bytes saved by compression, according to the estimate.
    #[must_use]
    pub const fn estimated_savings(&self) -> u64 {
        self.total_size.saturating_sub(self.estimated_size)
    }
}

/// Extrapolates the ratio in `stats` to `total_size` bytes.
///
/// # Errors
///
/// Returns [`SizerError::DegenerateRatio`] if `stats` consumed no bytes.
pub fn estimated_size(total_size: u64, stats: &CompressionStats) -> Result<u64> {
    ratio_for(total_size, stats).map(|ratio| scale(total_size, ratio))
}

fn ratio_for(total_size: u64, stats: &CompressionStats) -> Result<f64> {
    stats
        .ratio()
        .map_err(|_| SizerError::DegenerateRatio { total_size })
}

fn scale(total_size: u64, ratio: f64) -> u64 {
    (total_size as f64 * ratio) as u64
}

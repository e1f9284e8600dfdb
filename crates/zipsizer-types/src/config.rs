//! Sampling and compression configuration.

use serde::{Deserialize, Serialize};

use crate::{Codec, Result, SizerError};

/// Default distance between consecutive sample points (10 MiB).
pub const DEFAULT_STRIDE: u64 = 10 * 1024 * 1024;

/// Default fraction of every stride that is sampled.
pub const DEFAULT_SAMPLE_RATIO: f64 = 0.1;

/// Default compression level.
pub const DEFAULT_LEVEL: u32 = 9;

/// Default block size used when moving bytes between stages.
pub const DEFAULT_BLOCK_SIZE: usize = 4096;

/// Geometry of the virtual sampler.
///
/// Sample windows of `sample_size` bytes end on every multiple of `stride`
/// in the logical stream, so the first window starts at
/// `stride - sample_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleWindow {
    stride: u64,
    sample_size: u64,
}

impl SampleWindow {
    /// Creates a window, validating that `0 < sample_size <= stride`.
    ///
    /// # Errors
    ///
    /// Returns [`SizerError::InvalidConfig`] if the sizes are out of range.
    pub fn new(stride: u64, sample_size: u64) -> Result<Self> {
        if sample_size == 0 {
            return Err(SizerError::InvalidConfig(
                "sample size must be greater than zero".to_string(),
            ));
        }
        if sample_size > stride {
            return Err(SizerError::InvalidConfig(format!(
                "sample size {sample_size} exceeds stride {stride}"
            )));
        }
        Ok(Self {
            stride,
            sample_size,
        })
    }

    /// Creates a window whose sample size is `stride * ratio`, rounded down.
    ///
    /// # Errors
    ///
    /// Returns [`SizerError::InvalidConfig`] if `ratio` is not in `(0, 1]`
    /// or the resulting sample size is zero.
    pub fn from_ratio(stride: u64, ratio: f64) -> Result<Self> {
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(SizerError::InvalidConfig(format!(
                "sample ratio must be in (0, 1], got {ratio}"
            )));
        }
        let sample_size = (stride as f64 * ratio) as u64;
        Self::new(stride, sample_size)
    }

    /// Returns the stride in bytes.
    #[must_use]
    pub const fn stride(&self) -> u64 {
        self.stride
    }

    /// Returns the sample size in bytes.
    #[must_use]
    pub const fn sample_size(&self) -> u64 {
        self.sample_size
    }

    /// Returns the logical offset of the first sample point.
    #[must_use]
    pub const fn first_offset(&self) -> u64 {
        self.stride - self.sample_size
    }

    /// Returns the sampled fraction of each stride.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.sample_size as f64 / self.stride as f64
    }
}

impl Default for SampleWindow {
    fn default() -> Self {
        Self {
            stride: DEFAULT_STRIDE,
            sample_size: (DEFAULT_STRIDE as f64 * DEFAULT_SAMPLE_RATIO) as u64,
        }
    }
}

/// Configuration for a single estimation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateConfig {
    /// Sampler geometry.
    pub window: SampleWindow,
    /// Codec used to measure the compression ratio.
    pub codec: Codec,
    /// Codec-specific compression level.
    pub level: u32,
    /// Block size for reads on both sides of the compressor.
    pub block_size: usize,
}

impl EstimateConfig {
    /// Creates a configuration with the default block size.
    #[must_use]
    pub const fn new(window: SampleWindow, codec: Codec, level: u32) -> Self {
        Self {
            window,
            codec,
            level,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }

    /// Sets the block size used between stages.
    #[must_use]
    pub const fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self::new(SampleWindow::default(), Codec::default(), DEFAULT_LEVEL)
    }
}

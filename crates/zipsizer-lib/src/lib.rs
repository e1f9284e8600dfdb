//! Estimate the compressed size of a directory tree by sampling.
//!
//! This is a facade crate that re-exports functionality from the zipsizer
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use zipsizer_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let window = SampleWindow::from_ratio(DEFAULT_STRIDE, 0.1)?;
//!     let estimator = Estimator::new(EstimateConfig::new(window, Codec::Gzip, 9))?;
//!
//!     let estimate = estimator.estimate("/var/log").await?;
//!     println!(
//!         "{} bytes -> ~{} bytes",
//!         estimate.total_size, estimate.estimated_size
//!     );
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use zipsizer_types::*;

// Re-export sampling
pub use zipsizer_sample::{
    FileWalker, SamplePoints, SampleSummary, VirtualSampler, expected_sample_count,
    last_window_len,
};

// Re-export compression
pub use zipsizer_compress::{
    CompressionStats, PipeReader, PipeWriter, StreamingCompressor, compression_ratio, pipe,
};

// Re-export the estimation pipeline
#[cfg(feature = "estimate")]
pub use zipsizer_estimate::{Estimate, Estimator, estimated_size};

/// Prelude module for convenient imports.
///
/// ```
/// use zipsizer_lib::prelude::*;
/// ```
pub mod prelude {
    pub use zipsizer_types::{
        Codec, DEFAULT_LEVEL, DEFAULT_SAMPLE_RATIO, DEFAULT_STRIDE, EstimateConfig, FileRecord,
        Result, SampleWindow, SizerError, Stage,
    };

    pub use zipsizer_compress::{CompressionStats, StreamingCompressor};
    pub use zipsizer_sample::SampleSummary;

    #[cfg(feature = "estimate")]
    pub use zipsizer_estimate::{Estimate, Estimator};
}

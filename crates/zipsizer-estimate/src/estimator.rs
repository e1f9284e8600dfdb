//! Concurrent estimation pipeline.
//!
//! Three blocking stages run at once: enumeration pushes file records into a
//! depth-one queue, the sampler turns them into sampled bytes written to a
//! single-slot pipe, and the compressor measures that pipe. Every hand-off
//! blocks when full, so memory stays bounded by block size.

use std::io;
use std::path::Path;

use tokio::sync::mpsc;
use tokio::task::{self, JoinError};
use tracing::{debug, info};
use zipsizer_compress::{CompressionStats, StreamingCompressor, pipe};
use zipsizer_sample::{FileWalker, SampleSummary, VirtualSampler};
use zipsizer_types::{EstimateConfig, FileRecord, Result, SizerError, Stage};

use crate::Estimate;

/// Records that may wait between enumeration and sampling.
const RECORD_QUEUE_DEPTH: usize = 1;

/// Estimates compressed size by sampling.
#[derive(Debug, Clone)]
pub struct Estimator {
    config: EstimateConfig,
    compressor: StreamingCompressor,
}

impl Estimator {
    /// Creates an estimator, validating the codec and level up front.
    ///
    /// # Errors
    ///
    /// Returns [`SizerError::CodecConstruction`] if the level is invalid for
    /// the codec.
    pub fn new(config: EstimateConfig) -> Result<Self> {
        let compressor = StreamingCompressor::new(config.codec, config.level)?
            .with_block_size(config.block_size);
        Ok(Self { config, compressor })
    }

    /// Creates an estimator with the default configuration.
    ///
    /// # Errors
    ///
    /// Never fails for the default configuration; see [`Estimator::new`].
    pub fn with_defaults() -> Result<Self> {
        Self::new(EstimateConfig::default())
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &EstimateConfig {
        &self.config
    }

    /// Estimates the compressed size of every regular file under `root`.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error of any stage; see [`SizerError`].
    pub async fn estimate(&self, root: impl AsRef<Path>) -> Result<Estimate> {
        let root = root.as_ref().to_path_buf();
        info!(
            root = %root.display(),
            stride = self.config.window.stride(),
            sample_size = self.config.window.sample_size(),
            sample_ratio = self.config.window.ratio(),
            codec = %self.config.codec,
            level = self.config.level,
            "estimating compressed size"
        );

        let walk_root = root.clone();
        let estimate = self
            .run(move |tx| {
                let mut walker = FileWalker::new(walk_root);
                for record in walker.by_ref() {
                    if tx.blocking_send(record).is_err() {
                        break;
                    }
                }
                walker.skipped()
            })
            .await?;

        Ok(estimate.with_root(root))
    }

    /// Estimates the compressed size of an explicit record sequence.
    ///
    /// Records are sampled in the order given.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error of any stage; see [`SizerError`].
    pub async fn estimate_records<I>(&self, records: I) -> Result<Estimate>
    where
        I: IntoIterator<Item = FileRecord> + Send + 'static,
    {
        self.run(move |tx| {
            for record in records {
                if tx.blocking_send(record).is_err() {
                    break;
                }
            }
            0
        })
        .await
    }

    /// Runs the three stages and combines their results.
    ///
    /// `enumerate` sends records and returns the number of skipped entries.
    async fn run<F>(&self, enumerate: F) -> Result<Estimate>
    where
        F: FnOnce(mpsc::Sender<FileRecord>) -> u64 + Send + 'static,
    {
        let (record_tx, mut record_rx) = mpsc::channel(RECORD_QUEUE_DEPTH);
        let (mut sample_writer, sample_reader) = pipe();
        let window = self.config.window;
        let block_size = self.config.block_size;
        let compressor = self.compressor;

        let enumerated = task::spawn_blocking(move || enumerate(record_tx));
        let sampled = task::spawn_blocking(move || {
            let records = std::iter::from_fn(|| record_rx.blocking_recv());
            let result = VirtualSampler::new(window, block_size).run(records, &mut sample_writer);
            if let Err(e) = &result {
                sample_writer.close_with_error(io::Error::other(e.to_string()));
            }
            result
        });
        let compressed = task::spawn_blocking(move || compressor.measure(sample_reader));

        let (enumerated, sampled, compressed) = tokio::join!(enumerated, sampled, compressed);
        let skipped = enumerated.map_err(|e| stage_failed(Stage::Enumerate, &e))?;
        let sampled = sampled.map_err(|e| stage_failed(Stage::Sample, &e))?;
        let compressed = compressed.map_err(|e| stage_failed(Stage::Compress, &e))?;
        let (sample, compression) = settle(sampled, compressed)?;

        debug!(?sample, ?compression, skipped, "pipeline finished");
        let estimate = Estimate::new(self.config.codec, self.config.level, sample, compression)?
            .with_skipped_entries(skipped);
        info!(
            total_size = estimate.total_size,
            estimated_size = estimate.estimated_size,
            ratio = estimate.ratio,
            sampled_bytes = estimate.sample.sampled_bytes,
            "estimate ready"
        );
        Ok(estimate)
    }
}

/// Picks the error that explains a failed run best.
///
/// A sampler read failure is the root cause of whatever the compressor saw;
/// otherwise a compressor failure is what broke the sampler's pipe.
fn settle(
    sampled: Result<SampleSummary>,
    compressed: Result<CompressionStats>,
) -> Result<(SampleSummary, CompressionStats)> {
    match (sampled, compressed) {
        (Ok(sample), Ok(compression)) => Ok((sample, compression)),
        (Err(e @ SizerError::SampleRead { .. }), _) | (Ok(_), Err(e)) => Err(e),
        (Err(_), Err(e)) | (Err(e), Ok(_)) => Err(e),
    }
}

fn stage_failed(stage: Stage, err: &JoinError) -> SizerError {
    SizerError::StageFailed {
        stage,
        message: err.to_string(),
    }
}

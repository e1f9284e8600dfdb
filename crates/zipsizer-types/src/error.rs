//! Error types for zipsizer.

use std::path::PathBuf;

use thiserror::Error;

use crate::Codec;

/// Result type alias for zipsizer operations.
pub type Result<T> = std::result::Result<T, SizerError>;

/// A stage of the estimation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Directory traversal producing file records.
    Enumerate,
    /// Virtual sampler reading windows out of files.
    Sample,
    /// Encoder fed with sampled bytes.
    Compress,
    /// Consumer counting the encoder's output.
    Drain,
}

impl Stage {
    /// Returns the stage name as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Enumerate => "enumerate",
            Self::Sample => "sample",
            Self::Compress => "compress",
            Self::Drain => "drain",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fatal errors that abort an estimation run.
#[derive(Error, Debug)]
pub enum SizerError {
    /// A file selected for sampling could not be opened, sought or read.
    #[error("failed to sample {}: {source}", path.display())]
    SampleRead {
        /// The file being sampled.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The codec rejected the requested level.
    #[error("cannot construct {codec} encoder at level {level} (expected 1-9)")]
    CodecConstruction {
        /// The selected codec.
        codec: Codec,
        /// The rejected level.
        level: u32,
    },

    /// A read or write on an internal stream hand-off failed.
    #[error("stream error in {stage} stage: {source}")]
    StreamIo {
        /// The stage that observed the failure.
        stage: Stage,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// No bytes were sampled, so no compression ratio exists.
    #[error(
        "no bytes were sampled from {total_size} bytes of input; \
         the dataset is empty or smaller than one sample window"
    )]
    DegenerateRatio {
        /// The true total size of the dataset.
        total_size: u64,
    },

    /// Invalid sampling or compression parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A pipeline stage panicked or was cancelled.
    #[error("{stage} stage terminated unexpectedly: {message}")]
    StageFailed {
        /// The stage that terminated.
        stage: Stage,
        /// What the runtime reported.
        message: String,
    },
}

impl SizerError {
    /// Creates a [`SizerError::SampleRead`] for the given path.
    pub fn sample_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SampleRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a [`SizerError::StreamIo`] for the given stage.
    #[must_use]
    pub const fn stream_io(stage: Stage, source: std::io::Error) -> Self {
        Self::StreamIo { stage, source }
    }
}

//! Streaming compression-ratio measurement for zipsizer.
//!
//! This crate provides the back half of the estimation pipeline:
//!
//! - [`pipe`] - Bounded single-slot byte pipe between blocking stages
//! - [`StreamingCompressor`] - Feeds an encoder and counts its output concurrently
//! - [`CompressionStats`] - Byte counters and the resulting ratio
//! - [`compression_ratio`] - One-shot ratio of a reader

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod compressor;
mod encoder;
mod pipe;

pub use compressor::{CompressionStats, StreamingCompressor, compression_ratio};
pub use pipe::{PipeReader, PipeWriter, pipe};

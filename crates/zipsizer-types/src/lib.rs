//! Core types for the zipsizer compressed-size estimator.
//!
//! This crate provides the data model shared by every pipeline stage:
//!
//! - [`FileRecord`] - A regular file discovered by enumeration (path and size)
//! - [`SampleWindow`] - Stride and sample size of the virtual sampler
//! - [`Codec`] - One of the two supported streaming compressors
//! - [`EstimateConfig`] - Everything the estimation pipeline needs to run
//! - [`SizerError`] - Fatal errors, tagged with the pipeline [`Stage`] where useful

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod codec;
mod config;
mod error;
mod record;

pub use codec::{Codec, CodecParseError};
pub use config::{
    DEFAULT_BLOCK_SIZE, DEFAULT_LEVEL, DEFAULT_SAMPLE_RATIO, DEFAULT_STRIDE, EstimateConfig,
    SampleWindow,
};
pub use error::{Result, SizerError, Stage};
pub use record::FileRecord;

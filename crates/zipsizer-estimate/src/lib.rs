//! Compressed-size estimation pipeline for zipsizer.
//!
//! This crate wires the stages together:
//!
//! - [`Estimator`] - Runs enumerate, sample and compress concurrently
//! - [`Estimate`] - Exact original size, extrapolated compressed size and counters
//! - [`estimated_size`] - Extrapolates a measured ratio to a total size

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimate;
mod estimator;

pub use estimate::{Estimate, estimated_size};
pub use estimator::Estimator;

//! File enumeration and virtual-concatenation sampling for zipsizer.
//!
//! This crate provides the front half of the estimation pipeline:
//!
//! - [`FileWalker`] - Stable-order enumeration of regular files under a root
//! - [`SamplePoints`] - Lazy sample offsets into the logical stream
//! - [`VirtualSampler`] - Maps sample offsets to files and copies the windows out
//! - [`SampleSummary`] - Exact total size and sampling counters for a run

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod points;
mod sampler;
mod walk;

pub use points::{SamplePoints, expected_sample_count, last_window_len};
pub use sampler::{SampleSummary, VirtualSampler};
pub use walk::FileWalker;

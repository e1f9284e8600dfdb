//! Estimate command implementation.
//!
//! Validates the arguments, runs the sampling pipeline over the directory and
//! prints the result.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use zipsizer_lib::prelude::*;

use crate::display::render_estimate;

/// Arguments of the estimate command.
#[derive(Debug)]
pub(crate) struct EstimateArgs {
    pub(crate) directory: PathBuf,
    pub(crate) level: u32,
    pub(crate) algorithm: String,
    pub(crate) sample_ratio: f64,
    pub(crate) stride: u64,
    pub(crate) human_readable: bool,
    pub(crate) json: bool,
    pub(crate) verbose: bool,
    pub(crate) quiet: bool,
}

/// Estimate the compressed size of a directory and print it.
pub(crate) async fn estimate(args: &EstimateArgs) -> Result<()> {
    let config = build_config(args)?;
    let estimator = Estimator::new(config)?;

    let progress = if args.quiet || args.json || args.verbose {
        ProgressBar::hidden()
    } else {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")?;
        let pb = ProgressBar::new_spinner();
        pb.set_style(style);
        pb.set_message(format!("Sampling {}", args.directory.display()));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    };

    let result = estimator.estimate(&args.directory).await;
    progress.finish_and_clear();
    let estimate =
        result.with_context(|| format!("Failed to estimate {}", args.directory.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
    } else {
        print!("{}", render_estimate(&estimate, args.human_readable, args.verbose));
    }

    Ok(())
}

/// Validate the arguments and turn them into a pipeline configuration.
fn build_config(args: &EstimateArgs) -> Result<EstimateConfig> {
    let is_dir = std::fs::metadata(&args.directory)
        .map(|m| m.is_dir())
        .unwrap_or(false);
    if !is_dir {
        bail!(
            "Provided path '{}' is not a directory.",
            args.directory.display()
        );
    }

    if !(args.sample_ratio > 0.0 && args.sample_ratio <= 1.0) {
        bail!("Sample ratio must be between 0 and 1.");
    }

    let codec: Codec = args.algorithm.parse()?;
    if !codec.supports_level(args.level) {
        bail!("Compression level must be between 1 and 9.");
    }

    let window = SampleWindow::from_ratio(args.stride, args.sample_ratio)
        .context("Invalid sampling parameters")?;

    Ok(EstimateConfig::new(window, codec, args.level))
}

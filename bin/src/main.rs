//! zipsizer CLI - Estimate the compressed size of a directory tree.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use zipsizer_lib::{DEFAULT_LEVEL, DEFAULT_SAMPLE_RATIO, DEFAULT_STRIDE};

mod commands;
mod display;

use commands::estimate::EstimateArgs;

#[derive(Parser)]
#[command(name = "zipsizer")]
#[command(about = "Estimate the compressed size of a directory tree by sampling", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory to scan for files
    directory: PathBuf,

    /// Compression level (1-9)
    #[arg(short = 'l', long, default_value_t = DEFAULT_LEVEL)]
    compression_level: u32,

    /// Compression algorithm (gzip or bzip2)
    #[arg(short = 'a', long, default_value = "gzip")]
    compression_algorithm: String,

    /// Sample ratio for compression estimation, in (0, 1]
    #[arg(short = 'r', long, default_value_t = DEFAULT_SAMPLE_RATIO)]
    sample_ratio: f64,

    /// Distance between sample windows in bytes
    #[arg(long, default_value_t = DEFAULT_STRIDE)]
    stride: u64,

    /// Display sizes in human-readable format
    #[arg(short = 'u', long)]
    human_readable: bool,

    /// Print the estimate as JSON
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress progress output and warnings)
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose, cli.quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = EstimateArgs {
        directory: cli.directory,
        level: cli.compression_level,
        algorithm: cli.compression_algorithm,
        sample_ratio: cli.sample_ratio,
        stride: cli.stride,
        human_readable: cli.human_readable,
        json: cli.json,
        verbose: cli.verbose > 0,
        quiet: cli.quiet,
    };

    commands::estimate::estimate(&args).await
}

/// Maps `-q` and the `-v` count to a log level.
const fn log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

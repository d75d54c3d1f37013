//! CLI argument definitions.

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Artifact-free segment extraction from clinical EEG recordings.
#[derive(Debug, Parser)]
#[command(name = "eegslice")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Recording manifests or directories to process.
    pub inputs: Vec<PathBuf>,

    /// Common options for segment extraction.
    #[command(flatten)]
    pub slice: SliceArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for segment extraction.
#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct SliceArgs {
    /// Segment length in seconds.
    #[arg(short = 'l', long = "length", value_parser = clap::value_parser!(u64).range(1..),
          env = "EEGSLICE_LENGTH")]
    pub target_length: Option<u64>,

    /// Number of segments to extract per recording.
    #[arg(short = 'n', long = "segments", env = "EEGSLICE_SEGMENTS")]
    pub target_segments: Option<usize>,

    /// Seconds excluded unconditionally at the start of every recording.
    #[arg(long, value_parser = parse_seconds, env = "EEGSLICE_LEADING_EXCLUSION")]
    pub leading_exclusion: Option<f64>,

    /// Output formats (comma-separated: csv,json).
    #[arg(short, long, value_delimiter = ',', env = "EEGSLICE_FORMAT")]
    pub format: Option<Vec<OutputFormat>>,

    /// Output directory (default: same as input).
    #[arg(short, long, env = "EEGSLICE_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Process at most this many recordings.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Reprocess recordings even if output exists.
    #[arg(long)]
    pub force: bool,

    /// Stop on first error.
    #[arg(long)]
    pub fail_fast: bool,

    /// Suppress progress output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress bar without changing log verbosity.
    #[arg(long)]
    pub no_progress: bool,
}

/// Parse and validate a non-negative seconds value.
fn parse_seconds(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !value.is_finite() || value < 0.0 {
        return Err(format!("seconds must be a non-negative number, got {value}"));
    }

    Ok(value)
}

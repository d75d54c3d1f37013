//! Eegslice - clean segment extraction from clinical EEG recordings.
//!
//! Recordings contain known contaminated stretches (procedure windows,
//! signal dropouts) that must be excluded; this crate locates the clean
//! stretches in between and carves fixed-length segments from them.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod detect;
pub mod error;
pub mod intervals;
pub mod output;
pub mod pipeline;
pub mod recording;

use clap::Parser;
use cli::{Cli, Command, ConfigAction, SliceArgs};
use config::{Config, load_default_config, save_default_config};
use detect::FlatSignal;
use pipeline::{
    BatchReport, FileOutcome, ProcessCheck, SliceOptions, collect_manifest_files, output_dir_for,
    process_file, should_process,
};
use std::path::PathBuf;
use tracing::{error, info, warn};

pub use error::{Error, Result};

/// Main entry point for the eegslice CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.slice.verbose, cli.slice.quiet);

    // Load configuration
    let config = load_default_config()?;

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command);
    }

    // Default: extract segments
    if cli.inputs.is_empty() {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    }

    slice_files(&cli.inputs, &cli.slice, &config)
}

/// Extract segments from the given recordings.
fn slice_files(inputs: &[PathBuf], args: &SliceArgs, config: &Config) -> Result<()> {
    use crate::output::progress;
    use std::time::Instant;

    let total_start = Instant::now();

    // Collect all manifests up front so the limit and progress bar see a
    // stable, ordered list.
    let mut files = collect_manifest_files(inputs)?;
    if files.is_empty() {
        return Err(Error::NoRecordingsFound);
    }
    if let Some(limit) = args.limit {
        files.truncate(limit);
    }

    info!("Found {} recording manifest(s) to process", files.len());

    // Resolve settings: CLI flags override the config file.
    let options = SliceOptions {
        formats: args
            .format
            .clone()
            .unwrap_or_else(|| config.defaults.formats.clone()),
        target_length: args.target_length.unwrap_or(config.defaults.target_length),
        target_segments: args
            .target_segments
            .unwrap_or(config.defaults.target_segments),
        leading_exclusion: args
            .leading_exclusion
            .unwrap_or(config.defaults.leading_exclusion),
        flat: FlatSignal {
            amplitude_threshold: config.flat.amplitude_threshold,
            min_duration: config.flat.min_duration,
            min_channel_fraction: config.flat.min_channel_fraction,
        },
    };

    let progress_enabled = !args.quiet && !args.no_progress;
    let file_progress = progress::create_file_progress(files.len(), progress_enabled);

    let mut report = BatchReport::default();
    for file in &files {
        let file_output_dir = output_dir_for(file, args.output_dir.as_deref());

        if let ProcessCheck::SkipExists =
            should_process(file, &file_output_dir, &options.formats, args.force)
        {
            info!("Skipping (output exists): {}", file.display());
            report.skipped += 1;
            progress::inc_progress(file_progress.as_ref());
            continue;
        }

        match process_file(file, &file_output_dir, &options) {
            Ok(FileOutcome::Extracted(summary)) => {
                report.extracted += 1;
                report.segments += summary.segments;
            }
            Ok(FileOutcome::NoCleanIntervals) => {
                report.empty += 1;
            }
            Err(e) => {
                error!("Failed to process {}: {}", file.display(), e);
                report.failed += 1;
                if args.fail_fast {
                    progress::finish_progress(file_progress, "Failed");
                    return Err(e);
                }
            }
        }
        progress::inc_progress(file_progress.as_ref());
    }

    progress::finish_progress(file_progress, "Complete");

    // Summary
    info!(
        "Complete: {} extracted ({} segment(s)), {} without clean intervals, {} skipped, {} failed in {:.2}s",
        report.extracted,
        report.segments,
        report.empty,
        report.skipped,
        report.failed,
        total_start.elapsed().as_secs_f64()
    );

    if report.failed > 0 && !args.fail_fast {
        warn!("{} recording(s) failed", report.failed);
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}

fn handle_command(command: Command) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action),
    }
}

fn handle_config_command(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config::config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let config = Config::default();
                let saved_path = save_default_config(&config)?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config::config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

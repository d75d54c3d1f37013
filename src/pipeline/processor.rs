//! Single recording processing pipeline.

use crate::config::OutputFormat;
use crate::detect::{
    BadIntervalDetector, FlatSignal, Hyperventilation, PhoticStimulation, detect_bad_intervals,
};
use crate::error::{Error, Result};
use crate::intervals::{Selection, clean_spans, select_segments};
use crate::output::{CsvWriter, JsonCutListWriter, SegmentRecord, SegmentWriter};
use crate::pipeline::output_path_for;
use crate::recording::{Recording, load_manifest};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Options for processing a single recording.
#[derive(Debug, Clone)]
pub struct SliceOptions {
    /// Output formats to generate.
    pub formats: Vec<OutputFormat>,
    /// Segment length in seconds.
    pub target_length: u64,
    /// Number of segments to extract.
    pub target_segments: usize,
    /// Leading exclusion in seconds.
    pub leading_exclusion: f64,
    /// Flat-signal detector to run.
    pub flat: FlatSignal,
}

/// Summary of one processed recording.
#[derive(Debug, Clone, Copy)]
pub struct SliceSummary {
    /// Number of segments extracted.
    pub segments: usize,
    /// Number of positive-length clean spans found.
    pub clean_spans: usize,
    /// Number of bad intervals reported by detectors and the manifest.
    pub bad_intervals: usize,
}

/// Outcome of processing one recording.
///
/// A recording without a long-enough clean stretch is a reportable
/// outcome, not a failure.
#[derive(Debug, Clone, Copy)]
pub enum FileOutcome {
    /// Segments extracted and cut lists written.
    Extracted(SliceSummary),
    /// No clean interval of sufficient length; nothing written.
    NoCleanIntervals,
}

/// Process a single recording manifest and write its cut lists.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded, its interval data is
/// invalid, or an output file cannot be written.
pub fn process_file(
    input_path: &Path,
    output_dir: &Path,
    options: &SliceOptions,
) -> Result<FileOutcome> {
    let start_time = Instant::now();

    info!("Processing: {}", input_path.display());

    let recording = load_manifest(input_path)?;

    let detectors: Vec<Box<dyn BadIntervalDetector>> = vec![
        Box::new(options.flat.clone()),
        Box::new(Hyperventilation),
        Box::new(PhoticStimulation),
    ];
    let mut bad_intervals = detect_bad_intervals(&recording, &detectors);
    bad_intervals.extend_from_slice(&recording.bad_intervals);
    debug!(
        "{} bad interval(s) in '{}' ({} from the manifest)",
        bad_intervals.len(),
        recording.name,
        recording.bad_intervals.len()
    );

    let spans = clean_spans(&bad_intervals, recording.duration, options.leading_exclusion)?;
    let positive_spans = spans.iter().filter(|span| span.length > 0.0).count();

    let selection = select_segments(&spans, options.target_length, options.target_segments)?;
    let segments = match selection {
        Selection::InsufficientCleanDuration => {
            info!(
                "No clean interval of {}s in '{}' ({} clean span(s))",
                options.target_length, recording.name, positive_spans
            );
            return Ok(FileOutcome::NoCleanIntervals);
        }
        Selection::Segments(segments) => segments,
    };

    let records: Vec<SegmentRecord> = segments
        .iter()
        .enumerate()
        .map(|(position, segment)| {
            SegmentRecord::new(
                &recording.name,
                position + 1,
                *segment,
                input_path.to_path_buf(),
            )
        })
        .collect();

    std::fs::create_dir_all(output_dir).map_err(|e| Error::OutputDirCreate {
        path: output_dir.to_path_buf(),
        source: e,
    })?;
    for format in &options.formats {
        write_output(
            input_path,
            output_dir,
            *format,
            &recording,
            &records,
            positive_spans,
            options,
        )?;
    }

    info!(
        "Extracted {} segment(s) from '{}' in {:.2}s",
        records.len(),
        recording.name,
        start_time.elapsed().as_secs_f64()
    );

    Ok(FileOutcome::Extracted(SliceSummary {
        segments: records.len(),
        clean_spans: positive_spans,
        bad_intervals: bad_intervals.len(),
    }))
}

/// Write segment records to one output file.
fn write_output(
    input_path: &Path,
    output_dir: &Path,
    format: OutputFormat,
    recording: &Recording,
    records: &[SegmentRecord],
    positive_spans: usize,
    options: &SliceOptions,
) -> Result<()> {
    let output_path = output_path_for(input_path, output_dir, format);
    debug!("Writing {} output: {}", format, output_path.display());

    let source_file = input_path
        .file_name()
        .map_or_else(|| "unknown".to_string(), |n| n.to_string_lossy().into_owned());

    let mut writer: Box<dyn SegmentWriter> = match format {
        OutputFormat::Csv => Box::new(CsvWriter::new(&output_path)?),
        OutputFormat::Json => Box::new(JsonCutListWriter::new(
            &output_path,
            &recording.name,
            &source_file,
            recording.duration,
            options.target_length,
            options.target_segments,
            options.leading_exclusion,
            positive_spans,
        )),
    };

    writer.write_header()?;
    for record in records {
        writer.write_segment(record)?;
    }
    writer.finalize()?;

    Ok(())
}

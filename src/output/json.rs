//! JSON cut-list writer.

use crate::error::{Error, Result};
use crate::output::{SegmentRecord, SegmentWriter};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// JSON cut-list file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonCutList {
    /// Recording name segments are named after.
    pub recording: String,
    /// Source manifest file name.
    pub source_file: String,
    /// Extraction timestamp.
    pub generated: DateTime<Utc>,
    /// Extraction settings.
    pub settings: JsonSettings,
    /// Selected segments, earliest first.
    pub segments: Vec<JsonSegment>,
    /// Summary statistics.
    pub summary: JsonSummary,
}

/// Extraction settings for JSON output.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonSettings {
    /// Segment length in seconds.
    pub target_length: u64,
    /// Requested number of segments.
    pub target_segments: usize,
    /// Leading exclusion in seconds.
    pub leading_exclusion: f64,
}

/// Single segment in JSON format.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonSegment {
    /// Segment name (`<recording>_<index>`).
    pub name: String,
    /// Start time in seconds.
    pub start: u64,
    /// End time in seconds.
    pub end: u64,
}

/// Summary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonSummary {
    /// Number of selected segments.
    pub total_segments: usize,
    /// Number of positive-length clean spans in the recording.
    pub clean_spans: usize,
    /// Recording duration in seconds.
    pub recording_duration_secs: f64,
}

/// Writer for JSON cut-list files.
///
/// Records are collected in memory and serialized once on finalize.
pub struct JsonCutListWriter {
    records: Vec<SegmentRecord>,
    output_path: PathBuf,
    recording: String,
    source_file: String,
    duration_secs: f64,
    target_length: u64,
    target_segments: usize,
    leading_exclusion: f64,
    clean_spans: usize,
}

impl JsonCutListWriter {
    /// Create a new JSON cut-list writer.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        output_path: &Path,
        recording: &str,
        source_file: &str,
        duration_secs: f64,
        target_length: u64,
        target_segments: usize,
        leading_exclusion: f64,
        clean_spans: usize,
    ) -> Self {
        Self {
            records: Vec::new(),
            output_path: output_path.to_path_buf(),
            recording: recording.to_string(),
            source_file: source_file.to_string(),
            duration_secs,
            target_length,
            target_segments,
            leading_exclusion,
            clean_spans,
        }
    }
}

impl SegmentWriter for JsonCutListWriter {
    fn write_header(&mut self) -> Result<()> {
        Ok(())
    }

    fn write_segment(&mut self, record: &SegmentRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        let cut_list = JsonCutList {
            recording: self.recording.clone(),
            source_file: self.source_file.clone(),
            generated: Utc::now(),
            settings: JsonSettings {
                target_length: self.target_length,
                target_segments: self.target_segments,
                leading_exclusion: self.leading_exclusion,
            },
            segments: self
                .records
                .iter()
                .map(|record| JsonSegment {
                    name: record.name.clone(),
                    start: record.start,
                    end: record.end,
                })
                .collect(),
            summary: JsonSummary {
                total_segments: self.records.len(),
                clean_spans: self.clean_spans,
                recording_duration_secs: self.duration_secs,
            },
        };

        let file = File::create(&self.output_path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &cut_list).map_err(|e| {
            Error::JsonWrite {
                path: self.output_path.clone(),
                source: e,
            }
        })?;
        Ok(())
    }
}

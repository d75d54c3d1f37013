//! In-memory recording model and manifest loading.
//!
//! The clinical container format itself is not parsed here; a recording
//! arrives either through this crate's API or as a JSON manifest carrying
//! the timeline facts the detectors need (duration, annotations, optional
//! channel samples).

mod manifest;

pub use manifest::{is_manifest_file, load_manifest};

use crate::intervals::Interval;

/// A single timeline annotation from the recording equipment.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// Onset in seconds from the start of the recording.
    pub onset: f64,
    /// Annotation duration in seconds (zero for point markers).
    pub duration: f64,
    /// Annotation text as written by the equipment.
    pub description: String,
}

/// Sampled data for one channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    /// Channel label (e.g. `C3`).
    pub label: String,
    /// Sampling rate in Hz.
    pub sample_rate: f64,
    /// Samples in volts.
    pub samples: Vec<f64>,
}

/// One recording: the input unit of the slicing pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Recording {
    /// Base name used for naming extracted segments.
    pub name: String,
    /// Total duration in seconds.
    pub duration: f64,
    /// Timeline annotations.
    pub annotations: Vec<Annotation>,
    /// Exclusion windows declared directly, in addition to detector output.
    pub bad_intervals: Vec<Interval>,
    /// Channel data, when available; empty disables flat-signal detection.
    pub channels: Vec<Channel>,
}

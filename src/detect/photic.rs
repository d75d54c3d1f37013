//! Photic stimulation window detection from timeline markers.

use crate::detect::BadIntervalDetector;
use crate::intervals::Interval;
use crate::recording::Recording;

/// Detects the flashing-light (photic stimulation) protocol window.
///
/// Stimulation markers carry the flash frequency in their description
/// (`1Hz`, `14Hz`, ...). With at least two markers the window spans from
/// the first marker's onset to the end of the last one; a lone marker is
/// not enough evidence that the protocol ran.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoticStimulation;

impl BadIntervalDetector for PhoticStimulation {
    fn name(&self) -> &'static str {
        "photic-stimulation"
    }

    fn detect(&self, recording: &Recording) -> Vec<Interval> {
        let markers: Vec<_> = recording
            .annotations
            .iter()
            .filter(|annotation| annotation.description.contains("Hz"))
            .collect();

        match (markers.first(), markers.last()) {
            (Some(first), Some(last)) if markers.len() > 1 => {
                vec![Interval::new(first.onset, last.onset + last.duration)]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::recording::Annotation;

    fn recording_with(markers: &[(f64, f64, &str)]) -> Recording {
        Recording {
            name: "test".to_string(),
            duration: 3600.0,
            annotations: markers
                .iter()
                .map(|(onset, duration, description)| Annotation {
                    onset: *onset,
                    duration: *duration,
                    description: (*description).to_string(),
                })
                .collect(),
            bad_intervals: Vec::new(),
            channels: Vec::new(),
        }
    }

    #[test]
    fn test_window_spans_first_to_last_marker() {
        let recording = recording_with(&[
            (2000.0, 10.0, "1Hz"),
            (2020.0, 10.0, "5Hz"),
            (2040.0, 10.0, "14Hz"),
        ]);
        let intervals = PhoticStimulation.detect(&recording);
        assert_eq!(intervals, vec![Interval::new(2000.0, 2050.0)]);
    }

    #[test]
    fn test_single_marker_is_not_a_window() {
        let recording = recording_with(&[(2000.0, 10.0, "14Hz")]);
        assert!(PhoticStimulation.detect(&recording).is_empty());
    }

    #[test]
    fn test_non_frequency_markers_ignored() {
        let recording = recording_with(&[
            (100.0, 0.0, "eyes open"),
            (2000.0, 10.0, "1Hz"),
            (2040.0, 10.0, "18Hz"),
            (3000.0, 0.0, "drowsy"),
        ]);
        let intervals = PhoticStimulation.detect(&recording);
        assert_eq!(intervals, vec![Interval::new(2000.0, 2050.0)]);
    }

    #[test]
    fn test_no_markers_no_window() {
        let recording = recording_with(&[(100.0, 0.0, "eyes open")]);
        assert!(PhoticStimulation.detect(&recording).is_empty());
    }
}

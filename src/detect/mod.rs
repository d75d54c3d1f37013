//! Bad-interval detectors.
//!
//! Each detector independently inspects a recording and reports the time
//! windows that must be excluded from segment extraction. Detectors are
//! replaceable behind the [`BadIntervalDetector`] trait; the pipeline only
//! sees the interval lists they return.

mod flat;
mod hyperventilation;
mod photic;

pub use flat::FlatSignal;
pub use hyperventilation::Hyperventilation;
pub use photic::PhoticStimulation;

use crate::intervals::Interval;
use crate::recording::Recording;
use tracing::debug;

/// A detector of contaminated time windows in one recording.
pub trait BadIntervalDetector {
    /// Short detector name for logs.
    fn name(&self) -> &'static str;

    /// Report exclusion windows, in seconds. May be empty.
    fn detect(&self, recording: &Recording) -> Vec<Interval>;
}

/// Run a set of detectors over a recording and collect their output.
///
/// The returned list is unordered and may contain overlaps; normalization
/// is the caller's next step.
pub fn detect_bad_intervals(
    recording: &Recording,
    detectors: &[Box<dyn BadIntervalDetector>],
) -> Vec<Interval> {
    let mut intervals = Vec::new();
    for detector in detectors {
        let found = detector.detect(recording);
        debug!(
            "{}: {} interval(s) in '{}'",
            detector.name(),
            found.len(),
            recording.name
        );
        intervals.extend(found);
    }
    intervals
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<Interval>);

    impl BadIntervalDetector for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn detect(&self, _recording: &Recording) -> Vec<Interval> {
            self.0.clone()
        }
    }

    fn empty_recording() -> Recording {
        Recording {
            name: "test".to_string(),
            duration: 100.0,
            annotations: Vec::new(),
            bad_intervals: Vec::new(),
            channels: Vec::new(),
        }
    }

    #[test]
    fn test_collects_all_detector_output() {
        let detectors: Vec<Box<dyn BadIntervalDetector>> = vec![
            Box::new(Fixed(vec![Interval::new(1.0, 2.0)])),
            Box::new(Fixed(Vec::new())),
            Box::new(Fixed(vec![
                Interval::new(5.0, 6.0),
                Interval::new(3.0, 4.0),
            ])),
        ];
        let intervals = detect_bad_intervals(&empty_recording(), &detectors);
        assert_eq!(intervals.len(), 3);
    }
}

//! Flat (zero) signal detection.

use crate::constants::flat;
use crate::detect::BadIntervalDetector;
use crate::intervals::Interval;
use crate::recording::Recording;

/// Detects stretches of flat signal across channels.
///
/// A sample is flat when its absolute amplitude is at or below the
/// threshold; a per-channel run qualifies once it lasts the minimum
/// duration. A window is reported wherever the required fraction of
/// channels is flat at the same time. Recordings without channel data
/// yield nothing.
#[derive(Debug, Clone)]
pub struct FlatSignal {
    /// Absolute amplitude at or below which a sample counts as flat.
    pub amplitude_threshold: f64,
    /// Minimum duration of a qualifying per-channel run, in seconds.
    pub min_duration: f64,
    /// Fraction of channels that must be simultaneously flat.
    pub min_channel_fraction: f64,
}

impl Default for FlatSignal {
    fn default() -> Self {
        Self {
            amplitude_threshold: flat::AMPLITUDE_THRESHOLD,
            min_duration: flat::MIN_DURATION_SECS,
            min_channel_fraction: flat::MIN_CHANNEL_FRACTION,
        }
    }
}

impl FlatSignal {
    /// Flat runs of one channel, as time intervals.
    fn channel_runs(&self, sample_rate: f64, samples: &[f64]) -> Vec<Interval> {
        let mut runs = Vec::new();
        if sample_rate <= 0.0 {
            return runs;
        }

        let mut run_start: Option<usize> = None;
        for (index, sample) in samples.iter().enumerate() {
            if sample.abs() <= self.amplitude_threshold {
                if run_start.is_none() {
                    run_start = Some(index);
                }
            } else if let Some(start) = run_start.take() {
                self.push_run(&mut runs, sample_rate, start, index);
            }
        }
        if let Some(start) = run_start {
            self.push_run(&mut runs, sample_rate, start, samples.len());
        }
        runs
    }

    #[allow(clippy::cast_precision_loss)]
    fn push_run(&self, runs: &mut Vec<Interval>, sample_rate: f64, start: usize, end: usize) {
        let start_secs = start as f64 / sample_rate;
        let end_secs = end as f64 / sample_rate;
        if end_secs - start_secs >= self.min_duration {
            runs.push(Interval::new(start_secs, end_secs));
        }
    }
}

impl BadIntervalDetector for FlatSignal {
    fn name(&self) -> &'static str {
        "flat-signal"
    }

    fn detect(&self, recording: &Recording) -> Vec<Interval> {
        if recording.channels.is_empty() {
            return Vec::new();
        }

        // Boundary sweep over all qualifying runs: +1 at run start, -1 at
        // run end, emit wherever the overlap depth reaches the channel
        // quorum.
        let mut events: Vec<(f64, i32)> = Vec::new();
        for channel in &recording.channels {
            for run in self.channel_runs(channel.sample_rate, &channel.samples) {
                events.push((run.start, 1));
                events.push((run.end, -1));
            }
        }
        if events.is_empty() {
            return Vec::new();
        }
        // Starts before ends at equal times, so touching runs stay joined.
        events.sort_by(|a, b| a.0.total_cmp(&b.0).then(b.1.cmp(&a.1)));

        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let quorum =
            ((recording.channels.len() as f64 * self.min_channel_fraction).ceil() as usize).max(1);

        let mut intervals = Vec::new();
        let mut depth = 0_usize;
        let mut open_at: Option<f64> = None;
        for (time, delta) in events {
            if delta > 0 {
                depth += 1;
                if depth == quorum && open_at.is_none() {
                    open_at = Some(time);
                }
            } else {
                if depth == quorum
                    && let Some(start) = open_at.take()
                {
                    intervals.push(Interval::new(start, time));
                }
                depth = depth.saturating_sub(1);
            }
        }
        intervals
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::recording::Channel;

    fn recording_with(channels: Vec<Channel>) -> Recording {
        Recording {
            name: "test".to_string(),
            duration: 60.0,
            annotations: Vec::new(),
            bad_intervals: Vec::new(),
            channels,
        }
    }

    fn channel(label: &str, samples: Vec<f64>) -> Channel {
        Channel {
            label: label.to_string(),
            sample_rate: 1.0,
            samples,
        }
    }

    /// `n` flat samples at 1 Hz.
    fn flat_run(n: usize) -> Vec<f64> {
        vec![0.0; n]
    }

    fn live_run(n: usize) -> Vec<f64> {
        vec![1e-3; n]
    }

    #[test]
    fn test_no_channels_no_intervals() {
        let detector = FlatSignal::default();
        assert!(detector.detect(&recording_with(Vec::new())).is_empty());
    }

    #[test]
    fn test_short_flat_run_ignored() {
        let detector = FlatSignal::default();
        let mut samples = live_run(10);
        samples.extend(flat_run(5));
        samples.extend(live_run(10));
        let recording = recording_with(vec![channel("C3", samples)]);
        assert!(detector.detect(&recording).is_empty());
    }

    #[test]
    fn test_long_flat_run_reported() {
        let detector = FlatSignal::default();
        let mut samples = live_run(10);
        samples.extend(flat_run(20));
        samples.extend(live_run(10));
        let recording = recording_with(vec![channel("C3", samples)]);
        let intervals = detector.detect(&recording);
        assert_eq!(intervals, vec![Interval::new(10.0, 30.0)]);
    }

    #[test]
    fn test_trailing_flat_run_reported() {
        let detector = FlatSignal::default();
        let mut samples = live_run(10);
        samples.extend(flat_run(15));
        let recording = recording_with(vec![channel("C3", samples)]);
        let intervals = detector.detect(&recording);
        assert_eq!(intervals, vec![Interval::new(10.0, 25.0)]);
    }

    #[test]
    fn test_single_flat_channel_below_quorum() {
        let detector = FlatSignal::default();
        let mut flat_ch = live_run(10);
        flat_ch.extend(flat_run(20));
        flat_ch.extend(live_run(10));
        let recording = recording_with(vec![
            channel("C3", flat_ch),
            channel("C4", live_run(40)),
            channel("O1", live_run(40)),
        ]);
        // One of three channels flat: under the 50% quorum.
        assert!(detector.detect(&recording).is_empty());
    }

    #[test]
    fn test_quorum_reports_common_window() {
        let detector = FlatSignal::default();
        let mut first = live_run(10);
        first.extend(flat_run(20)); // flat 10..30
        first.extend(live_run(10));
        let mut second = live_run(15);
        second.extend(flat_run(20)); // flat 15..35
        second.extend(live_run(5));
        let recording = recording_with(vec![channel("C3", first), channel("C4", second)]);
        let intervals = detector.detect(&recording);
        assert_eq!(intervals, vec![Interval::new(15.0, 30.0)]);
    }
}

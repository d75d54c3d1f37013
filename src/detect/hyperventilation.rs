//! Hyperventilation window detection from timeline markers.

use crate::constants::hyperventilation as hv;
use crate::detect::BadIntervalDetector;
use crate::intervals::Interval;
use crate::recording::Recording;

/// Detects the deep-breathing (hyperventilation) procedure window.
///
/// The window start comes from the one-minute countdown marker (minus its
/// lead time), falling back to the begin marker; the end comes from a
/// post-procedure countdown marker, falling back to the end marker plus the
/// recovery window. When several markers of a kind exist the last one wins.
/// If either boundary stays unresolved no interval is reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hyperventilation;

/// Offset after a `Post HV <N> Sec` marker until the recovery window ends.
fn post_marker_offset(description: &str) -> Option<f64> {
    let seconds: f64 = description
        .strip_prefix("Post HV ")?
        .strip_suffix(" Sec")?
        .parse()
        .ok()?;
    Some(hv::RECOVERY_SECS - seconds)
}

impl BadIntervalDetector for Hyperventilation {
    fn name(&self) -> &'static str {
        "hyperventilation"
    }

    fn detect(&self, recording: &Recording) -> Vec<Interval> {
        let mut start: Option<f64> = None;
        let mut end: Option<f64> = None;

        for annotation in &recording.annotations {
            match annotation.description.as_str() {
                "HV 1Min" | "HV 1 Min" => {
                    start = Some(annotation.onset - hv::COUNTDOWN_LEAD_SECS);
                }
                description => {
                    if let Some(offset) = post_marker_offset(description) {
                        end = Some(annotation.onset + offset);
                    }
                }
            }
        }

        if start.is_none() {
            for annotation in &recording.annotations {
                if matches!(annotation.description.as_str(), "HV Begin" | "Begin HV") {
                    start = Some(annotation.onset - hv::BEGIN_LEAD_SECS);
                }
            }
        }
        if end.is_none() {
            for annotation in &recording.annotations {
                if matches!(annotation.description.as_str(), "HV End" | "End HV") {
                    end = Some(annotation.onset + hv::RECOVERY_SECS);
                }
            }
        }

        match (start, end) {
            (Some(start), Some(end)) => vec![Interval::new(start, end)],
            _ => Vec::new(),
        }
    }
}

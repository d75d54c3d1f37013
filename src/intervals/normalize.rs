//! Normalization of exclusion windows into ordered clean spans.

use crate::error::{Error, Result};
use crate::intervals::{CleanSpan, Interval};

/// Derive the ordered clean spans of a recording from its exclusion windows.
///
/// `bad_intervals` may be unsorted, overlapping, nested, or empty. A leading
/// exclusion `(0, leading_exclusion)` is always applied, and a degenerate
/// `(total_duration, total_duration)` marker closes the timeline so every
/// entry has a successor. One span is emitted per sorted exclusion,
/// including degenerate spans with non-positive length; callers filter on
/// `length > 0`.
///
/// # Errors
///
/// Returns an error if `total_duration` is negative or any input interval
/// ends before it starts. Both indicate a caller bug, not a data condition.
pub fn clean_spans(
    bad_intervals: &[Interval],
    total_duration: f64,
    leading_exclusion: f64,
) -> Result<Vec<CleanSpan>> {
    if total_duration < 0.0 {
        return Err(Error::NegativeDuration {
            seconds: total_duration,
        });
    }
    for interval in bad_intervals {
        if interval.start > interval.end {
            return Err(Error::MalformedInterval {
                start: interval.start,
                end: interval.end,
            });
        }
    }

    let mut exclusions = Vec::with_capacity(bad_intervals.len() + 2);
    exclusions.extend_from_slice(bad_intervals);
    exclusions.push(Interval::new(0.0, leading_exclusion));
    exclusions.push(Interval::new(total_duration, total_duration));
    // Stable sort: ties on start keep input order, which is irrelevant
    // downstream since only end values feed the running maximum.
    exclusions.sort_by(|a, b| a.start.total_cmp(&b.start));

    // Running maximum over exclusion ends. A window whose end falls below
    // the high-water mark is subsumed by an earlier one, so the mark is
    // emitted unchanged; the emitted sequence is therefore non-decreasing
    // even for nested or back-to-front overlaps.
    let mut spans = Vec::with_capacity(exclusions.len());
    let mut merged_end = 0.0_f64;
    for (position, exclusion) in exclusions.iter().enumerate() {
        if exclusion.end > merged_end {
            merged_end = exclusion.end;
        }
        let next_start = exclusions
            .get(position + 1)
            .map_or(total_duration, |next| next.start);
        spans.push(CleanSpan {
            start: merged_end,
            end: next_start,
            length: next_start - merged_end,
        });
    }

    Ok(spans)
}

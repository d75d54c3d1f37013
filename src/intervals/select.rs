//! Packing of fixed-length segments into clean spans.

use crate::error::{Error, Result};
use crate::intervals::{CleanSpan, Segment};

/// Outcome of segment selection.
///
/// A recording whose clean spans are all shorter than the requested segment
/// length is a legitimate terminal state, not an error; callers must check
/// for it explicitly rather than assume a non-empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Segments selected, earliest first.
    Segments(Vec<Segment>),
    /// No clean span can hold even one segment.
    InsufficientCleanDuration,
}

impl Selection {
    /// Selected segments, empty when the recording had insufficient clean
    /// duration.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        match self {
            Self::Segments(segments) => segments,
            Self::InsufficientCleanDuration => &[],
        }
    }

    /// True when no clean span could hold a segment.
    #[must_use]
    pub fn is_insufficient(&self) -> bool {
        matches!(self, Self::InsufficientCleanDuration)
    }
}

/// Select up to `target_segments` non-overlapping segments of
/// `target_length` whole seconds from the clean spans of a recording.
///
/// Spans are visited in time order and packed from their earliest
/// whole-second boundary; iteration stops as soon as the requested count is
/// reached, so later spans are never touched. The returned count is exactly
/// `min(target_segments, total capacity)`.
///
/// Segment starts are aligned up to the next whole second and capacity is
/// computed from the aligned usable length, so a segment never leaks into
/// the exclusion preceding its span.
///
/// # Errors
///
/// Returns an error if `target_length` is zero.
pub fn select_segments(
    clean_spans: &[CleanSpan],
    target_length: u64,
    target_segments: usize,
) -> Result<Selection> {
    if target_length == 0 {
        return Err(Error::ZeroSegmentLength);
    }

    #[allow(clippy::cast_precision_loss)]
    let length_secs = target_length as f64;

    // Per-span packing plan: first aligned start and slot capacity.
    let mut plans: Vec<(u64, usize)> = Vec::new();
    let mut total_available = 0_usize;
    for span in clean_spans.iter().filter(|span| span.length > 0.0) {
        let first_start = span.start.ceil();
        let usable = span.end - first_start;
        if usable < length_secs {
            continue;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let capacity = (usable / length_secs).floor() as usize;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        plans.push((first_start as u64, capacity));
        total_available += capacity;
    }

    if total_available == 0 {
        return Ok(Selection::InsufficientCleanDuration);
    }

    let n_to_select = target_segments.min(total_available);
    let mut segments = Vec::with_capacity(n_to_select);
    'spans: for (first_start, capacity) in plans {
        let mut start = first_start;
        for _ in 0..capacity {
            if segments.len() == n_to_select {
                break 'spans;
            }
            segments.push(Segment {
                start,
                end: start + target_length,
            });
            start += target_length;
        }
    }

    Ok(Selection::Segments(segments))
}

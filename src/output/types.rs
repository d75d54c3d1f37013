//! Output type definitions.

use crate::intervals::Segment;
use std::path::PathBuf;

/// One selected segment, as written to a cut list.
#[derive(Debug, Clone)]
pub struct SegmentRecord {
    /// Segment name: `<recording>_<index>` with a 1-based index in
    /// selection order. Downstream tooling uses this as the file stem of
    /// the cropped copy.
    pub name: String,
    /// 1-based position in selection order.
    pub index: usize,
    /// Segment start in seconds.
    pub start: u64,
    /// Segment end in seconds.
    pub end: u64,
    /// Path to the source manifest.
    pub source: PathBuf,
}

impl SegmentRecord {
    /// Build the record for one selected segment.
    #[must_use]
    pub fn new(recording_name: &str, index: usize, segment: Segment, source: PathBuf) -> Self {
        Self {
            name: format!("{recording_name}_{index}"),
            index,
            start: segment.start,
            end: segment.end,
            source,
        }
    }

    /// Segment length in seconds.
    #[must_use]
    pub fn length(&self) -> u64 {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_naming_is_one_based() {
        let segment = Segment {
            start: 420,
            end: 480,
        };
        let record = SegmentRecord::new("scan_0042", 1, segment, PathBuf::from("scan_0042.json"));
        assert_eq!(record.name, "scan_0042_1");
        assert_eq!(record.length(), 60);
    }
}

//! Processing pipeline components.

mod coordinator;
mod processor;

pub use coordinator::{
    ProcessCheck, collect_manifest_files, output_dir_for, output_path_for, should_process,
};
pub use processor::{FileOutcome, SliceOptions, SliceSummary, process_file};

/// Per-file outcomes of one batch run.
///
/// Failures are counted, not discarded: a bad recording never aborts the
/// batch unless the caller asked for fail-fast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Recordings with at least one extracted segment.
    pub extracted: usize,
    /// Recordings with no clean interval of sufficient length.
    pub empty: usize,
    /// Recordings skipped because their outputs already exist.
    pub skipped: usize,
    /// Recordings that failed to process.
    pub failed: usize,
    /// Total segments extracted across the batch.
    pub segments: usize,
}

impl BatchReport {
    /// Number of recordings accounted for.
    #[must_use]
    pub fn total(&self) -> usize {
        self.extracted + self.empty + self.skipped + self.failed
    }
}

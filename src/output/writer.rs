//! Output writer trait definition.

use crate::error::Result;
use crate::output::SegmentRecord;

/// Trait for writing segment cut lists.
pub trait SegmentWriter {
    /// Write the file header (if applicable).
    fn write_header(&mut self) -> Result<()>;

    /// Write a single segment record.
    fn write_segment(&mut self, record: &SegmentRecord) -> Result<()>;

    /// Finalize the output (flush, close, etc.).
    fn finalize(&mut self) -> Result<()>;
}

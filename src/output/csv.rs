//! CSV cut-list writer.

use crate::error::Result;
use crate::output::{SegmentRecord, SegmentWriter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// CSV format cut-list writer.
pub struct CsvWriter {
    writer: BufWriter<File>,
}

impl CsvWriter {
    /// Create a new CSV writer.
    pub fn new(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl SegmentWriter for CsvWriter {
    fn write_header(&mut self) -> Result<()> {
        writeln!(self.writer, "Name,Start (s),End (s),Length (s),Source")?;
        Ok(())
    }

    fn write_segment(&mut self, record: &SegmentRecord) -> Result<()> {
        writeln!(
            self.writer,
            "{},{},{},{},{}",
            escape_csv(&record.name),
            record.start,
            record.end,
            record.length(),
            escape_csv(&record.source.display().to_string()),
        )?;
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Escape a value for CSV output.
fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::intervals::Segment;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_csv_writer_basic() {
        let file = NamedTempFile::new().unwrap();
        let mut writer = CsvWriter::new(file.path()).unwrap();

        writer.write_header().unwrap();
        let record = SegmentRecord::new(
            "scan_0042",
            1,
            Segment {
                start: 420,
                end: 480,
            },
            PathBuf::from("/data/scan_0042.json"),
        );
        writer.write_segment(&record).unwrap();
        writer.finalize().unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert!(contents.starts_with("Name,Start (s),End (s),Length (s),Source"));
        assert!(contents.contains("scan_0042_1,420,480,60,/data/scan_0042.json"));
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("simple"), "simple");
        assert_eq!(escape_csv("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv("with\"quote"), "\"with\"\"quote\"");
    }
}

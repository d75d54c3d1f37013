//! Pipeline coordination for recording processing.

use crate::config::OutputFormat;
use crate::constants::output_extensions;
use crate::error::Result;
use crate::recording::is_manifest_file;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Result of checking whether a recording should be processed.
#[derive(Debug)]
pub enum ProcessCheck {
    /// Recording should be processed.
    Process,
    /// Skip - all outputs already exist.
    SkipExists,
}

/// Determine the output directory for a recording.
pub fn output_dir_for(input: &Path, explicit_output_dir: Option<&Path>) -> PathBuf {
    explicit_output_dir.map_or_else(
        || {
            input
                .parent()
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
        },
        Path::to_path_buf,
    )
}

/// Get output file path for a given format.
pub fn output_path_for(input: &Path, output_dir: &Path, format: OutputFormat) -> PathBuf {
    // Non-UTF-8 file names degrade to the replacement character.
    let stem = input.file_stem().map_or_else(
        || std::borrow::Cow::Borrowed("output"),
        |s| s.to_string_lossy(),
    );

    let extension = match format {
        OutputFormat::Csv => output_extensions::CSV,
        OutputFormat::Json => output_extensions::JSON,
    };

    output_dir.join(format!("{stem}{extension}"))
}

/// Check if a recording should be processed.
pub fn should_process(
    input: &Path,
    output_dir: &Path,
    formats: &[OutputFormat],
    force: bool,
) -> ProcessCheck {
    if !force {
        let all_exist = formats
            .iter()
            .all(|fmt| output_path_for(input, output_dir, *fmt).exists());
        if all_exist {
            return ProcessCheck::SkipExists;
        }
    }

    ProcessCheck::Process
}

/// Collect recording manifests from paths (files and directories).
pub fn collect_manifest_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            if is_manifest_file(path) {
                files.push(path.clone());
            }
        } else if path.is_dir() {
            collect_manifests_recursive(path, &mut files)?;
        } else {
            warn!("Skipping non-existent path: {}", path.display());
        }
    }

    files.sort();
    Ok(files)
}

/// Recursively collect manifest files from a directory.
fn collect_manifests_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            collect_manifests_recursive(&path, files)?;
        } else if is_manifest_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_output_dir_for_with_explicit() {
        let input = Path::new("/data/scan_0042.json");
        let output = output_dir_for(input, Some(Path::new("/results")));
        assert_eq!(output, PathBuf::from("/results"));
    }

    #[test]
    fn test_output_dir_for_without_explicit() {
        let input = Path::new("/data/scan_0042.json");
        let output = output_dir_for(input, None);
        assert_eq!(output, PathBuf::from("/data"));
    }

    #[test]
    fn test_output_path_for_formats() {
        let csv = output_path_for(
            Path::new("scan_0042.json"),
            Path::new("/output"),
            OutputFormat::Csv,
        );
        assert!(csv.to_string_lossy().ends_with("scan_0042.segments.csv"));

        let json = output_path_for(
            Path::new("scan_0042.json"),
            Path::new("/output"),
            OutputFormat::Json,
        );
        assert!(json.to_string_lossy().ends_with("scan_0042.segments.json"));
    }

    #[test]
    fn test_collect_manifest_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.json", "a.json", "notes.txt"] {
            std::fs::write(dir.path().join(name), "{}").unwrap();
        }

        let files = collect_manifest_files(&[dir.path().to_path_buf()]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_should_process_skips_existing_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("scan_0042.json");
        std::fs::write(&input, "{}").unwrap();
        std::fs::write(dir.path().join("scan_0042.segments.csv"), "").unwrap();

        let formats = [OutputFormat::Csv];
        assert!(matches!(
            should_process(&input, dir.path(), &formats, false),
            ProcessCheck::SkipExists
        ));
        assert!(matches!(
            should_process(&input, dir.path(), &formats, true),
            ProcessCheck::Process
        ));
    }
}

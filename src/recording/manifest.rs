//! JSON manifest parsing for recordings.

use crate::error::{Error, Result};
use crate::intervals::Interval;
use crate::recording::{Annotation, Channel, Recording};
use serde::Deserialize;
use std::path::Path;

/// On-disk manifest layout.
#[derive(Debug, Deserialize)]
struct Manifest {
    /// Recording name; defaults to the manifest file stem.
    name: Option<String>,
    /// Total recording duration in seconds.
    duration_secs: f64,
    /// Timeline annotations.
    #[serde(default)]
    annotations: Vec<ManifestAnnotation>,
    /// Explicit exclusion windows as `[start, end]` pairs in seconds.
    #[serde(default)]
    bad_intervals: Vec<[f64; 2]>,
    /// Inline channel samples.
    #[serde(default)]
    channels: Vec<ManifestChannel>,
}

#[derive(Debug, Deserialize)]
struct ManifestAnnotation {
    onset: f64,
    #[serde(default)]
    duration: f64,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ManifestChannel {
    label: String,
    sample_rate: f64,
    samples: Vec<f64>,
}

/// Check whether a path looks like a recording manifest.
pub fn is_manifest_file(path: &Path) -> bool {
    use std::ffi::OsStr;

    path.extension().is_some_and(|ext| {
        ext.eq_ignore_ascii_case(OsStr::new(crate::constants::MANIFEST_EXTENSION))
    })
}

/// Load and validate a recording manifest.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, the duration is
/// negative, or a declared exclusion window ends before it starts.
pub fn load_manifest(path: &Path) -> Result<Recording> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::ManifestRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let manifest: Manifest =
        serde_json::from_str(&contents).map_err(|e| Error::ManifestParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    if manifest.duration_secs < 0.0 {
        return Err(Error::NegativeDuration {
            seconds: manifest.duration_secs,
        });
    }
    for [start, end] in &manifest.bad_intervals {
        if start > end {
            return Err(Error::MalformedInterval {
                start: *start,
                end: *end,
            });
        }
    }

    let name = manifest.name.unwrap_or_else(|| {
        path.file_stem().map_or_else(
            || "recording".to_string(),
            |stem| stem.to_string_lossy().into_owned(),
        )
    });

    Ok(Recording {
        name,
        duration: manifest.duration_secs,
        annotations: manifest
            .annotations
            .into_iter()
            .map(|a| Annotation {
                onset: a.onset,
                duration: a.duration,
                description: a.description,
            })
            .collect(),
        bad_intervals: manifest
            .bad_intervals
            .into_iter()
            .map(|[start, end]| Interval::new(start, end))
            .collect(),
        channels: manifest
            .channels
            .into_iter()
            .map(|c| Channel {
                label: c.label,
                sample_rate: c.sample_rate,
                samples: c.samples,
            })
            .collect(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_manifest(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_is_manifest_file() {
        assert!(is_manifest_file(Path::new("scan_0042.json")));
        assert!(is_manifest_file(Path::new("scan_0042.JSON")));
        assert!(!is_manifest_file(Path::new("scan_0042.edf")));
        assert!(!is_manifest_file(Path::new("scan_0042")));
    }

    #[test]
    fn test_load_minimal_manifest() {
        let file = write_manifest(r#"{"duration_secs": 3600.0}"#);
        let recording = load_manifest(file.path()).unwrap();
        assert_eq!(recording.duration, 3600.0);
        assert!(recording.annotations.is_empty());
        assert!(recording.bad_intervals.is_empty());
        assert!(recording.channels.is_empty());
        // Name falls back to the file stem.
        assert!(!recording.name.is_empty());
    }

    #[test]
    fn test_load_full_manifest() {
        let file = write_manifest(
            r#"{
                "name": "scan_0042",
                "duration_secs": 1800.0,
                "annotations": [
                    {"onset": 900.0, "description": "HV 1Min"},
                    {"onset": 1200.0, "duration": 10.0, "description": "14Hz"}
                ],
                "bad_intervals": [[100.0, 200.0]],
                "channels": [
                    {"label": "C3", "sample_rate": 2.0, "samples": [0.1, 0.2]}
                ]
            }"#,
        );
        let recording = load_manifest(file.path()).unwrap();
        assert_eq!(recording.name, "scan_0042");
        assert_eq!(recording.annotations.len(), 2);
        assert_eq!(recording.annotations[0].duration, 0.0);
        assert_eq!(recording.bad_intervals[0], Interval::new(100.0, 200.0));
        assert_eq!(recording.channels[0].samples.len(), 2);
    }

    #[test]
    fn test_negative_duration_rejected() {
        let file = write_manifest(r#"{"duration_secs": -5.0}"#);
        assert!(matches!(
            load_manifest(file.path()),
            Err(Error::NegativeDuration { .. })
        ));
    }

    #[test]
    fn test_malformed_bad_interval_rejected() {
        let file = write_manifest(
            r#"{"duration_secs": 100.0, "bad_intervals": [[50.0, 20.0]]}"#,
        );
        assert!(matches!(
            load_manifest(file.path()),
            Err(Error::MalformedInterval { .. })
        ));
    }

    #[test]
    fn test_unparseable_manifest_rejected() {
        let file = write_manifest("not json");
        assert!(matches!(
            load_manifest(file.path()),
            Err(Error::ManifestParse { .. })
        ));
    }
}

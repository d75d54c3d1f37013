//! Configuration type definitions.

use crate::constants::{
    DEFAULT_SEGMENT_COUNT, DEFAULT_SEGMENT_LENGTH, LEADING_EXCLUSION_SECS, flat,
};
use serde::{Deserialize, Serialize};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default extraction settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Flat-signal detector settings.
    #[serde(default)]
    pub flat: FlatDetectorConfig,
}

/// Default extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Length of each extracted segment in seconds.
    pub target_length: u64,

    /// Number of segments to extract per recording.
    pub target_segments: usize,

    /// Seconds excluded unconditionally at the start of every recording.
    pub leading_exclusion: f64,

    /// Output formats.
    pub formats: Vec<OutputFormat>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            target_length: DEFAULT_SEGMENT_LENGTH,
            target_segments: DEFAULT_SEGMENT_COUNT,
            leading_exclusion: LEADING_EXCLUSION_SECS,
            formats: vec![OutputFormat::Csv],
        }
    }
}

/// Flat-signal detector settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlatDetectorConfig {
    /// Absolute amplitude at or below which a sample counts as flat.
    pub amplitude_threshold: f64,

    /// Minimum duration of a flat run before it is reported, in seconds.
    pub min_duration: f64,

    /// Fraction of channels that must be simultaneously flat.
    pub min_channel_fraction: f64,
}

impl Default for FlatDetectorConfig {
    fn default() -> Self {
        Self {
            amplitude_threshold: flat::AMPLITUDE_THRESHOLD,
            min_duration: flat::MIN_DURATION_SECS,
            min_channel_fraction: flat::MIN_CHANNEL_FRACTION,
        }
    }
}

/// Supported cut-list output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV cut list.
    Csv,
    /// JSON cut list with settings and summary.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("csv".parse::<OutputFormat>().ok(), Some(OutputFormat::Csv));
        assert_eq!("JSON".parse::<OutputFormat>().ok(), Some(OutputFormat::Json));
        assert!("parquet".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_defaults_config_default_values() {
        let defaults = DefaultsConfig::default();
        assert_eq!(defaults.target_length, 60);
        assert_eq!(defaults.target_segments, 5);
        assert_eq!(defaults.leading_exclusion, 420.0);
        assert_eq!(defaults.formats, vec![OutputFormat::Csv]);
    }
}

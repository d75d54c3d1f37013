//! Error types for eegslice.

/// Result type alias for eegslice operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for eegslice.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// No recording manifests found in the provided paths.
    #[error("no recording manifests found in the provided paths")]
    NoRecordingsFound,

    /// Failed to read a recording manifest.
    #[error("failed to read manifest '{path}'")]
    ManifestRead {
        /// Path to the manifest file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a recording manifest.
    #[error("failed to parse manifest '{path}'")]
    ManifestParse {
        /// Path to the manifest file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Recording duration is negative.
    #[error("recording duration must be non-negative, got {seconds}")]
    NegativeDuration {
        /// The offending duration in seconds.
        seconds: f64,
    },

    /// An exclusion interval ends before it starts.
    #[error("malformed interval: start {start} is after end {end}")]
    MalformedInterval {
        /// Interval start in seconds.
        start: f64,
        /// Interval end in seconds.
        end: f64,
    },

    /// Requested segment length is zero.
    #[error("segment length must be greater than zero")]
    ZeroSegmentLength,

    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreate {
        /// Path to the output directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write JSON output file.
    #[error("failed to write JSON output file '{path}'")]
    JsonWrite {
        /// Path to the JSON file.
        path: std::path::PathBuf,
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}

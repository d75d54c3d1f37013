//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "eegslice";

/// Default length of each extracted segment in seconds.
pub const DEFAULT_SEGMENT_LENGTH: u64 = 60;

/// Default number of segments to extract per recording.
pub const DEFAULT_SEGMENT_COUNT: usize = 5;

/// Seconds excluded unconditionally at the start of every recording.
///
/// Clinical recordings begin with electrode calibration and settling time;
/// the first seven minutes are never used as segment material.
pub const LEADING_EXCLUSION_SECS: f64 = 420.0;

/// Manifest file extension recognized when collecting inputs.
pub const MANIFEST_EXTENSION: &str = "json";

/// Flat-signal detector parameters.
pub mod flat {
    /// Absolute amplitude at or below which a sample counts as flat, in volts.
    pub const AMPLITUDE_THRESHOLD: f64 = 1e-6;

    /// Minimum duration of a flat run before it is reported, in seconds.
    pub const MIN_DURATION_SECS: f64 = 10.0;

    /// Fraction of channels that must be simultaneously flat.
    pub const MIN_CHANNEL_FRACTION: f64 = 0.5;
}

/// Hyperventilation marker offsets, in seconds.
pub mod hyperventilation {
    /// Lead time subtracted from an `HV 1Min` countdown marker.
    pub const COUNTDOWN_LEAD_SECS: f64 = 90.0;

    /// Lead time subtracted from an `HV Begin` marker.
    pub const BEGIN_LEAD_SECS: f64 = 30.0;

    /// Recovery window added after the hyperventilation end marker.
    pub const RECOVERY_SECS: f64 = 90.0;
}

/// Output file extensions by format.
pub mod output_extensions {
    /// CSV cut-list extension.
    pub const CSV: &str = ".segments.csv";
    /// JSON cut-list extension.
    pub const JSON: &str = ".segments.json";
}

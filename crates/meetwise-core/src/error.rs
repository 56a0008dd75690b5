//! Core error types for meetwise-core.
//!
//! This module defines the error hierarchy using thiserror. The scheduler
//! validates participant and preference records up front and fails with a
//! specific error instead of silently degrading availability math.

use thiserror::Error;

/// Top-level error type for meetwise-core.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Participant or preference configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Timezone resolution errors
    #[error("Timezone error: {0}")]
    Zone(#[from] ZoneError),

    /// IO errors (request file loading)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML request file errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Time-of-day string does not match strict "HH:mm"
    #[error("Invalid time of day for '{field}': expected \"HH:mm\", got \"{value}\"")]
    InvalidTimeOfDay { field: String, value: String },

    /// Window where start is not strictly before end
    #[error("Invalid time window for '{field}': start ({start}) must be before end ({end})")]
    InvalidWindow {
        field: String,
        start: String,
        end: String,
    },

    /// Invalid value for a field
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Timezone-specific errors.
#[derive(Error, Debug)]
pub enum ZoneError {
    /// The identifier is not in the IANA tz database.
    ///
    /// Never defaulted to UTC: a silently wrong zone would corrupt every
    /// availability calculation for that participant.
    #[error("Unknown IANA timezone identifier: '{zone}'")]
    Unknown { zone: String },
}

/// Result type alias for ScheduleError
pub type Result<T, E = ScheduleError> = std::result::Result<T, E>;

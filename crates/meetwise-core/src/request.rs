//! Schedule request loading.
//!
//! A [`ScheduleRequest`] bundles everything one scheduling call needs.
//! Callers embedding the library build it in code; the CLI loads it from a
//! JSON or TOML file, picked by extension.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ScheduleError};
use crate::participant::Participant;
use crate::preferences::UserPreferences;

fn default_duration() -> i64 {
    30
}

/// A complete scheduling request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub participants: Vec<Participant>,
    /// Requested meeting length; sets slot end times only
    #[serde(default = "default_duration")]
    pub duration_minutes: i64,
    #[serde(default)]
    pub preferences: UserPreferences,
}

impl ScheduleRequest {
    pub fn from_json(s: &str) -> Result<Self, ScheduleError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_toml(s: &str) -> Result<Self, ScheduleError> {
        Ok(toml::from_str(s)?)
    }

    /// Load a request file, dispatching on the `.json` / `.toml` extension.
    pub fn load(path: &Path) -> Result<Self, ScheduleError> {
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&contents),
            Some("toml") => Self::from_toml(&contents),
            other => Err(ConfigError::InvalidValue {
                field: "request".to_string(),
                message: format!(
                    "unsupported request file extension {:?} (expected .json or .toml)",
                    other.unwrap_or("")
                ),
            }
            .into()),
        }
    }
}

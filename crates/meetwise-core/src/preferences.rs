//! Shared scheduling policy.
//!
//! [`UserPreferences`] applies uniformly to every participant in a request:
//! it represents organization-level defaults (lunch window, break policy,
//! daily meeting cap) rather than one individual's data.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ScheduleError};
use crate::participant::TimeWindowSpec;
use crate::timeutil::TimeWindow;

/// Scheduling policy shared by all participants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    /// Lunch window, interpreted in each participant's own zone
    pub lunch_time: TimeWindowSpec,
    /// When false, slots too close to a participant's last meeting are penalized
    pub back_to_back_meetings: bool,
    /// Minimum break between meetings, in minutes
    pub minimum_break_between_meetings: i64,
    /// Daily meeting cap per participant
    pub max_meetings_per_day: usize,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            lunch_time: TimeWindowSpec::new("12:00", "13:00"),
            back_to_back_meetings: true,
            minimum_break_between_meetings: 15,
            max_meetings_per_day: 6,
        }
    }
}

impl UserPreferences {
    /// Validate and compile the policy for scoring.
    pub fn resolve(&self) -> Result<ResolvedPreferences, ScheduleError> {
        let lunch_time =
            TimeWindow::parse("lunch_time", &self.lunch_time.start, &self.lunch_time.end)?;
        if self.minimum_break_between_meetings < 0 {
            return Err(ConfigError::InvalidValue {
                field: "minimum_break_between_meetings".to_string(),
                message: format!(
                    "must be non-negative, got {}",
                    self.minimum_break_between_meetings
                ),
            }
            .into());
        }
        Ok(ResolvedPreferences {
            lunch_time,
            back_to_back_meetings: self.back_to_back_meetings,
            minimum_break_between_meetings: self.minimum_break_between_meetings,
            max_meetings_per_day: self.max_meetings_per_day,
        })
    }
}

/// A validated scheduling policy.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedPreferences {
    pub lunch_time: TimeWindow,
    pub back_to_back_meetings: bool,
    pub minimum_break_between_meetings: i64,
    pub max_meetings_per_day: usize,
}

//! Participant records.
//!
//! A [`Participant`] is plain caller-supplied data: a display name, an IANA
//! timezone, a hard working-hours window, optional soft windows, and a list
//! of past meeting start times. [`Participant::resolve`] validates the
//! record and compiles it into the form the scoring engine consumes.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::profile::BehavioralProfile;
use crate::timeutil::{resolve_zone, TimeWindow};

/// Raw `"HH:mm"` pair for a local-time window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindowSpec {
    pub start: String,
    pub end: String,
}

impl TimeWindowSpec {
    /// Convenience constructor for building requests in code.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// A meeting participant as supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    /// Display name, unique within one scheduling request
    pub name: String,
    /// IANA timezone identifier (e.g. "Europe/Berlin")
    pub timezone: String,
    /// Hard daily reachability window in local time
    pub working_hours: TimeWindowSpec,
    /// Soft window that earns a scoring bonus
    #[serde(default)]
    pub preferred_times: Option<TimeWindowSpec>,
    /// Soft window that incurs a scoring penalty
    #[serde(default)]
    pub focus_time: Option<TimeWindowSpec>,
    /// Past meeting start times, list order preserved (not sorted here)
    #[serde(default)]
    pub meeting_history: Vec<DateTime<Utc>>,
}

impl Participant {
    /// Create a participant with only the required fields.
    pub fn new(
        name: impl Into<String>,
        timezone: impl Into<String>,
        working_hours: TimeWindowSpec,
    ) -> Self {
        Self {
            name: name.into(),
            timezone: timezone.into(),
            working_hours,
            preferred_times: None,
            focus_time: None,
            meeting_history: Vec::new(),
        }
    }

    /// Validate and compile this record for scoring.
    ///
    /// Fails with a [`ConfigError`](crate::ConfigError) naming the offending
    /// field, or a [`ZoneError`](crate::ZoneError) for an unknown timezone.
    pub fn resolve(&self) -> Result<ResolvedParticipant, ScheduleError> {
        let zone = resolve_zone(&self.timezone)?;

        let field = |window: &str| format!("{}.{}", self.name, window);
        let working_hours = TimeWindow::parse(
            &field("working_hours"),
            &self.working_hours.start,
            &self.working_hours.end,
        )?;
        let preferred_times = self
            .preferred_times
            .as_ref()
            .map(|w| TimeWindow::parse(&field("preferred_times"), &w.start, &w.end))
            .transpose()?;
        let focus_time = self
            .focus_time
            .as_ref()
            .map(|w| TimeWindow::parse(&field("focus_time"), &w.start, &w.end))
            .transpose()?;

        Ok(ResolvedParticipant {
            name: self.name.clone(),
            zone,
            working_hours,
            preferred_times,
            focus_time,
            meeting_history: self.meeting_history.clone(),
        })
    }

    /// Derive this participant's behavioral profile from their history.
    pub fn behavioral_profile(&self) -> Result<BehavioralProfile, ScheduleError> {
        let zone = resolve_zone(&self.timezone)?;
        Ok(BehavioralProfile::from_history(&self.meeting_history, zone))
    }
}

/// A validated participant, ready for scoring.
#[derive(Debug, Clone)]
pub struct ResolvedParticipant {
    pub name: String,
    pub zone: Tz,
    pub working_hours: TimeWindow,
    pub preferred_times: Option<TimeWindow>,
    pub focus_time: Option<TimeWindow>,
    pub meeting_history: Vec<DateTime<Utc>>,
}

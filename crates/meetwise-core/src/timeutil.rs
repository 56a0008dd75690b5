//! Time-of-day primitives and IANA timezone resolution.
//!
//! Participants describe their windows with `"HH:mm"` strings in their own
//! local time. This module parses those strings strictly and provides the
//! half-open window containment checks the scoring engine runs on.

use std::fmt;
use std::str::FromStr;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ZoneError};

/// A wall-clock time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeOfDay {
    /// Hour (0-23)
    pub hour: u32,
    /// Minute (0-59)
    pub minute: u32,
}

impl TimeOfDay {
    /// Parse a strict `"HH:mm"` string (zero-padded, 00:00 through 23:59).
    ///
    /// `field` names the originating record field so a malformed string in a
    /// large request points at the exact participant and window.
    pub fn parse(field: &str, value: &str) -> Result<Self, ConfigError> {
        let malformed = || ConfigError::InvalidTimeOfDay {
            field: field.to_string(),
            value: value.to_string(),
        };

        let (h, m) = value.split_once(':').ok_or_else(malformed)?;
        if h.len() != 2 || m.len() != 2 {
            return Err(malformed());
        }
        if !h.bytes().all(|b| b.is_ascii_digit()) || !m.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        let hour: u32 = h.parse().map_err(|_| malformed())?;
        let minute: u32 = m.parse().map_err(|_| malformed())?;
        if hour > 23 || minute > 59 {
            return Err(malformed());
        }

        Ok(Self { hour, minute })
    }

    /// Minutes since local midnight (0-1439).
    pub fn minute_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A half-open `[start, end)` window of local time within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeWindow {
    /// Parse a window from its two `"HH:mm"` strings.
    ///
    /// Requires `start < end`; overnight windows are rejected rather than
    /// silently matching nothing.
    pub fn parse(field: &str, start: &str, end: &str) -> Result<Self, ConfigError> {
        let start_tod = TimeOfDay::parse(&format!("{field}.start"), start)?;
        let end_tod = TimeOfDay::parse(&format!("{field}.end"), end)?;
        if start_tod >= end_tod {
            return Err(ConfigError::InvalidWindow {
                field: field.to_string(),
                start: start_tod.to_string(),
                end: end_tod.to_string(),
            });
        }
        Ok(Self {
            start: start_tod,
            end: end_tod,
        })
    }

    /// Minute-granular containment: is the given minute-of-day inside
    /// `[start, end)`? Used for the hard working-hours gate.
    pub fn contains_minute_of_day(&self, minute_of_day: u32) -> bool {
        minute_of_day >= self.start.minute_of_day() && minute_of_day < self.end.minute_of_day()
    }

    /// Hour-granular containment: is the given hour inside
    /// `[start.hour, end.hour)`?
    ///
    /// Soft windows (preferred, focus, lunch) intentionally ignore the
    /// minute components, so "09:30"-"16:45" behaves like "09:00"-"16:00".
    pub fn contains_hour(&self, hour: u32) -> bool {
        hour >= self.start.hour && hour < self.end.hour
    }
}

/// Resolve an IANA timezone identifier to a [`Tz`].
pub fn resolve_zone(zone: &str) -> Result<Tz, ZoneError> {
    Tz::from_str(zone).map_err(|_| ZoneError::Unknown {
        zone: zone.to_string(),
    })
}

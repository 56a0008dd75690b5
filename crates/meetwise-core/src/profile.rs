//! Behavioral profile extraction.
//!
//! The scheduler infers each participant's habits from their meeting
//! history: which part of the day they tend to meet in, how many meetings
//! they average per day, and whether they chain meetings back to back.
//! Profiles are derived fresh on every scheduling call, never cached.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Part of the local day a meeting hour falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPart {
    /// Local hour < 12
    Morning,
    /// Local hour 12 through 16
    Afternoon,
    /// Local hour >= 17
    Evening,
}

impl DayPart {
    /// Bucket a local hour (0-23).
    pub fn of_hour(hour: u32) -> Self {
        if hour < 12 {
            DayPart::Morning
        } else if hour < 17 {
            DayPart::Afternoon
        } else {
            DayPart::Evening
        }
    }
}

impl std::fmt::Display for DayPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayPart::Morning => write!(f, "morning"),
            DayPart::Afternoon => write!(f, "afternoon"),
            DayPart::Evening => write!(f, "evening"),
        }
    }
}

/// Habits inferred from one participant's meeting history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BehavioralProfile {
    /// Day-part with the most historical meetings; `None` with no history.
    /// Ties resolve in morning, afternoon, evening order (first wins).
    pub preferred_day_part: Option<DayPart>,
    /// Rough meetings-per-day estimate assuming the history spans ~30 days
    pub meetings_per_day: f64,
    /// True when more than 30% of adjacent history entries sit within an
    /// hour of each other (list order, not time order)
    pub back_to_back_tendency: bool,
}

impl BehavioralProfile {
    /// Derive a profile from meeting start times, projected into `zone`.
    pub fn from_history(history: &[DateTime<Utc>], zone: Tz) -> Self {
        if history.is_empty() {
            return Self {
                preferred_day_part: None,
                meetings_per_day: 0.0,
                back_to_back_tendency: false,
            };
        }

        let mut counts = [0usize; 3];
        for meeting in history {
            match DayPart::of_hour(meeting.with_timezone(&zone).hour()) {
                DayPart::Morning => counts[0] += 1,
                DayPart::Afternoon => counts[1] += 1,
                DayPart::Evening => counts[2] += 1,
            }
        }

        // First wins on ties, in morning/afternoon/evening order.
        let mut preferred = DayPart::Morning;
        let mut best = counts[0];
        for (part, count) in [(DayPart::Afternoon, counts[1]), (DayPart::Evening, counts[2])] {
            if count > best {
                preferred = part;
                best = count;
            }
        }

        let close_pairs = history
            .windows(2)
            .filter(|pair| (pair[1] - pair[0]).num_seconds().abs() <= 3600)
            .count();

        Self {
            preferred_day_part: Some(preferred),
            meetings_per_day: history.len() as f64 / 30.0,
            back_to_back_tendency: close_pairs as f64 > history.len() as f64 * 0.3,
        }
    }
}

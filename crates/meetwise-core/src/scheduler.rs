//! Slot generation, aggregation, and ranking.
//!
//! [`SlotScheduler`] walks candidate instants over a lookahead window,
//! scores every participant at each instant, keeps only the slots where
//! every participant is available, and returns the top slots ranked by
//! total score. Each call is an independent, deterministic computation
//! over its inputs; nothing is cached between calls.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ScheduleError};
use crate::participant::Participant;
use crate::preferences::UserPreferences;
use crate::profile::BehavioralProfile;
use crate::scoring::{score_instant, PREFERRED_SCORE_THRESHOLD};

/// Scheduler configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Spacing between candidate instants (minutes)
    pub slot_interval_minutes: i64,
    /// Lookahead window from `now` (hours)
    pub lookahead_hours: i64,
    /// Maximum number of slots to return
    pub max_results: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            slot_interval_minutes: 30,
            lookahead_hours: 168,
            max_results: 10,
        }
    }
}

/// One participant's availability verdict for a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantAvailability {
    /// Score > 0
    pub is_available: bool,
    /// Score reached the high-confidence threshold
    pub is_preferred: bool,
}

/// A ranked candidate meeting slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateSlot {
    /// Proposed meeting start
    pub start_time: DateTime<Utc>,
    /// Proposed meeting end (start + requested duration)
    pub end_time: DateTime<Utc>,
    /// Sum of all participants' scores at this instant
    pub score: i32,
    /// Per-participant verdicts, keyed by participant name
    pub participant_availability: BTreeMap<String, ParticipantAvailability>,
}

/// Meeting slot suggestion engine.
pub struct SlotScheduler {
    config: SchedulerConfig,
}

impl SlotScheduler {
    /// Create a scheduler with the default 30-minute / 7-day / top-10 config.
    pub fn new() -> Self {
        Self {
            config: SchedulerConfig::default(),
        }
    }

    /// Create with custom config.
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Suggest ranked meeting slots for a group of participants.
    ///
    /// Candidate instants start at `now` and advance by the configured
    /// interval for the whole lookahead window (inclusive start, exclusive
    /// end). A slot survives only if every participant scores above zero at
    /// that instant; surviving slots rank by total score descending with
    /// earlier start times breaking ties.
    ///
    /// `duration_minutes` sets each slot's `end_time` and never affects
    /// scoring or filtering.
    ///
    /// An empty participant list, or a window with no all-available instant,
    /// yields `Ok` with an empty vector.
    pub fn suggest_slots(
        &self,
        participants: &[Participant],
        duration_minutes: i64,
        preferences: &UserPreferences,
        now: DateTime<Utc>,
    ) -> Result<Vec<CandidateSlot>, ScheduleError> {
        if participants.is_empty() {
            return Ok(Vec::new());
        }
        if duration_minutes < 0 {
            return Err(ConfigError::InvalidValue {
                field: "duration_minutes".to_string(),
                message: format!("must be non-negative, got {duration_minutes}"),
            }
            .into());
        }

        let mut seen = HashSet::new();
        for participant in participants {
            if !seen.insert(participant.name.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "participants".to_string(),
                    message: format!("duplicate participant name '{}'", participant.name),
                }
                .into());
            }
        }

        let resolved = participants
            .iter()
            .map(|p| p.resolve())
            .collect::<Result<Vec<_>, _>>()?;
        let prefs = preferences.resolve()?;
        let profiles: Vec<BehavioralProfile> = resolved
            .iter()
            .map(|p| BehavioralProfile::from_history(&p.meeting_history, p.zone))
            .collect();

        let slot_count = self.config.lookahead_hours * 60 / self.config.slot_interval_minutes;
        let mut slots = Vec::new();

        for step in 0..slot_count {
            let start = now + Duration::minutes(step * self.config.slot_interval_minutes);

            let mut total = 0;
            let mut all_available = true;
            let mut availability = BTreeMap::new();

            for (participant, profile) in resolved.iter().zip(&profiles) {
                let score = score_instant(start, participant, profile, &prefs);
                all_available &= score > 0;
                availability.insert(
                    participant.name.clone(),
                    ParticipantAvailability {
                        is_available: score > 0,
                        is_preferred: score >= PREFERRED_SCORE_THRESHOLD,
                    },
                );
                total += score;
            }

            if !all_available {
                continue;
            }

            slots.push(CandidateSlot {
                start_time: start,
                end_time: start + Duration::minutes(duration_minutes),
                score: total,
                participant_availability: availability,
            });
        }

        slots.sort_by(|a, b| b.score.cmp(&a.score).then(a.start_time.cmp(&b.start_time)));
        slots.truncate(self.config.max_results);
        Ok(slots)
    }
}

impl Default for SlotScheduler {
    fn default() -> Self {
        Self::new()
    }
}

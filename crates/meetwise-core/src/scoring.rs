//! Per-instant, per-participant scoring.
//!
//! Scores are additive integer adjustments on top of a hard working-hours
//! gate: an instant outside the participant's working hours scores exactly
//! 0 and no other term applies. Past the gate the score may go negative;
//! it is only ever compared, never clamped.

use chrono::{DateTime, Timelike, Utc};

use crate::participant::ResolvedParticipant;
use crate::preferences::ResolvedPreferences;
use crate::profile::{BehavioralProfile, DayPart};

/// Base score for an instant inside working hours.
pub const WORKING_HOURS_BASE: i32 = 50;
/// Bonus for landing in the participant's preferred window.
pub const PREFERRED_WINDOW_BONUS: i32 = 20;
/// Penalty for landing in the participant's focus window.
pub const FOCUS_TIME_PENALTY: i32 = 30;
/// Penalty for landing in the shared lunch window.
pub const LUNCH_PENALTY: i32 = 25;
/// Bonus for matching the participant's historical day-part preference.
pub const DAY_PART_PATTERN_BONUS: i32 = 15;
/// Penalty for scheduling too close to the participant's last meeting.
pub const BACK_TO_BACK_PENALTY: i32 = 40;
/// Penalty once the participant's daily meeting cap is reached.
pub const DAILY_CAP_PENALTY: i32 = 50;
/// Bonus for quarter-hour-aligned start times.
pub const QUARTER_HOUR_BONUS: i32 = 5;

/// Score at or above which a participant counts the slot as preferred.
pub const PREFERRED_SCORE_THRESHOLD: i32 = 70;

/// Score one candidate instant for one participant.
///
/// The instant is projected into the participant's zone; all window checks
/// run on that local wall-clock time. Soft windows (preferred, focus,
/// lunch) match at hour granularity, the working-hours gate at minute
/// granularity.
pub fn score_instant(
    instant: DateTime<Utc>,
    participant: &ResolvedParticipant,
    profile: &BehavioralProfile,
    prefs: &ResolvedPreferences,
) -> i32 {
    let local = instant.with_timezone(&participant.zone);
    let minute_of_day = local.hour() * 60 + local.minute();

    // Hard gate: outside working hours nothing else matters.
    if !participant.working_hours.contains_minute_of_day(minute_of_day) {
        return 0;
    }

    let hour = local.hour();
    let mut score = WORKING_HOURS_BASE;

    if let Some(preferred) = &participant.preferred_times {
        if preferred.contains_hour(hour) {
            score += PREFERRED_WINDOW_BONUS;
        }
    }

    if let Some(focus) = &participant.focus_time {
        if focus.contains_hour(hour) {
            score -= FOCUS_TIME_PENALTY;
        }
    }

    if prefs.lunch_time.contains_hour(hour) {
        score -= LUNCH_PENALTY;
    }

    if profile.preferred_day_part == Some(DayPart::of_hour(hour)) {
        score += DAY_PART_PATTERN_BONUS;
    }

    if !prefs.back_to_back_meetings {
        // The last list entry stands in for the most recent meeting; the
        // history is not re-sorted.
        if let Some(last) = participant.meeting_history.last() {
            let gap_seconds = (instant - *last).num_seconds().abs();
            if gap_seconds < prefs.minimum_break_between_meetings * 60 {
                score -= BACK_TO_BACK_PENALTY;
            }
        }
    }

    let local_date = local.date_naive();
    let meetings_that_day = participant
        .meeting_history
        .iter()
        .filter(|m| m.with_timezone(&participant.zone).date_naive() == local_date)
        .count();
    if meetings_that_day >= prefs.max_meetings_per_day {
        score -= DAILY_CAP_PENALTY;
    }

    if instant.minute() % 15 == 0 {
        score += QUARTER_HOUR_BONUS;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::participant::{Participant, TimeWindowSpec};
    use crate::preferences::UserPreferences;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    fn nine_to_five(zone: &str) -> ResolvedParticipant {
        Participant::new("p", zone, TimeWindowSpec::new("09:00", "17:00"))
            .resolve()
            .unwrap()
    }

    fn score_with(
        instant: DateTime<Utc>,
        participant: &ResolvedParticipant,
        prefs: &UserPreferences,
    ) -> i32 {
        let profile = BehavioralProfile::from_history(&participant.meeting_history, participant.zone);
        score_instant(instant, participant, &profile, &prefs.resolve().unwrap())
    }

    #[test]
    fn test_hard_gate_outside_working_hours() {
        let participant = nine_to_five("UTC");
        let prefs = UserPreferences::default();
        assert_eq!(score_with(utc(2026, 3, 2, 8, 30), &participant, &prefs), 0);
        assert_eq!(score_with(utc(2026, 3, 2, 17, 0), &participant, &prefs), 0);
        assert_eq!(score_with(utc(2026, 3, 2, 23, 45), &participant, &prefs), 0);
    }

    #[test]
    fn test_base_plus_quarter_alignment() {
        let participant = nine_to_five("UTC");
        let prefs = UserPreferences::default();
        // 09:00, 09:15, 09:30, 09:45 all align; 09:07 does not
        assert_eq!(score_with(utc(2026, 3, 2, 9, 0), &participant, &prefs), 55);
        assert_eq!(score_with(utc(2026, 3, 2, 9, 45), &participant, &prefs), 55);
        assert_eq!(score_with(utc(2026, 3, 2, 9, 7), &participant, &prefs), 50);
    }

    #[test]
    fn test_gate_uses_participant_local_time() {
        // 14:00 UTC is 09:00 in New York: inside their working hours
        let participant = nine_to_five("America/New_York");
        let prefs = UserPreferences::default();
        assert_eq!(score_with(utc(2026, 3, 2, 14, 0), &participant, &prefs), 55);
        // 09:00 UTC is 04:00 in New York: gated out
        assert_eq!(score_with(utc(2026, 3, 2, 9, 0), &participant, &prefs), 0);
    }

    #[test]
    fn test_preferred_window_bonus() {
        let mut raw = Participant::new("p", "UTC", TimeWindowSpec::new("09:00", "17:00"));
        raw.preferred_times = Some(TimeWindowSpec::new("10:00", "12:00"));
        let participant = raw.resolve().unwrap();
        let prefs = UserPreferences::default();
        assert_eq!(score_with(utc(2026, 3, 2, 10, 0), &participant, &prefs), 75);
        assert_eq!(score_with(utc(2026, 3, 2, 9, 0), &participant, &prefs), 55);
    }

    #[test]
    fn test_focus_and_lunch_penalties() {
        let mut raw = Participant::new("p", "UTC", TimeWindowSpec::new("09:00", "17:00"));
        raw.focus_time = Some(TimeWindowSpec::new("14:00", "16:00"));
        let participant = raw.resolve().unwrap();
        let prefs = UserPreferences::default();
        // focus window: 50 - 30 + 5
        assert_eq!(score_with(utc(2026, 3, 2, 14, 0), &participant, &prefs), 25);
        // default lunch window: 50 - 25 + 5
        assert_eq!(score_with(utc(2026, 3, 2, 12, 30), &participant, &prefs), 30);
    }

    #[test]
    fn test_pattern_bonus_follows_history() {
        let mut raw = Participant::new("p", "UTC", TimeWindowSpec::new("09:00", "17:00"));
        raw.meeting_history = vec![utc(2026, 2, 23, 10, 0), utc(2026, 2, 24, 9, 30)];
        let participant = raw.resolve().unwrap();
        let prefs = UserPreferences::default();
        // morning slots get the pattern bonus, afternoon slots do not
        assert_eq!(score_with(utc(2026, 3, 2, 10, 0), &participant, &prefs), 70);
        assert_eq!(score_with(utc(2026, 3, 2, 14, 0), &participant, &prefs), 55);
    }

    #[test]
    fn test_back_to_back_penalty_uses_last_list_entry() {
        let mut raw = Participant::new("p", "UTC", TimeWindowSpec::new("09:00", "17:00"));
        // Out of time order: the list-order last entry is 10:00, not 14:00
        raw.meeting_history = vec![utc(2026, 3, 2, 14, 0), utc(2026, 3, 2, 10, 0)];
        let participant = raw.resolve().unwrap();
        let prefs = UserPreferences {
            back_to_back_meetings: false,
            minimum_break_between_meetings: 30,
            max_meetings_per_day: 10,
            ..Default::default()
        };
        // 10:20 is 20 min from the last entry: penalized
        let near_last = score_with(utc(2026, 3, 2, 10, 20), &participant, &prefs);
        // 11:20 is 80 min from the last entry, same day-part: not penalized
        let far_from_last = score_with(utc(2026, 3, 2, 11, 20), &participant, &prefs);
        assert_eq!(near_last, far_from_last - BACK_TO_BACK_PENALTY);
        // 14:10 is 10 min from an earlier entry but 250 min from the list-last
        // entry: the penalty keys off the last element only
        assert_eq!(score_with(utc(2026, 3, 2, 14, 10), &participant, &prefs), 50);
    }

    #[test]
    fn test_back_to_back_allowed_skips_penalty() {
        let mut raw = Participant::new("p", "UTC", TimeWindowSpec::new("09:00", "17:00"));
        raw.meeting_history = vec![utc(2026, 3, 2, 10, 0)];
        let participant = raw.resolve().unwrap();
        let prefs = UserPreferences {
            back_to_back_meetings: true,
            minimum_break_between_meetings: 30,
            max_meetings_per_day: 10,
            ..Default::default()
        };
        // 50 + 15 (morning pattern from the one meeting) + 5
        assert_eq!(score_with(utc(2026, 3, 2, 10, 15), &participant, &prefs), 70);
    }

    #[test]
    fn test_daily_cap_penalty_in_local_dates() {
        let mut raw = Participant::new("p", "Asia/Tokyo", TimeWindowSpec::new("09:00", "17:00"));
        // 23:30 UTC on Mar 1 is already Mar 2 in Tokyo
        raw.meeting_history = vec![utc(2026, 3, 1, 23, 30)];
        let participant = raw.resolve().unwrap();
        let prefs = UserPreferences {
            max_meetings_per_day: 1,
            ..Default::default()
        };
        // 01:00 UTC Mar 2 = 10:00 Tokyo Mar 2: same local day, cap reached
        // 50 + 15 (morning pattern) - 50 + 5
        assert_eq!(score_with(utc(2026, 3, 2, 1, 0), &participant, &prefs), 20);
        // 01:00 UTC Mar 3 = 10:00 Tokyo Mar 3: next local day, no cap
        assert_eq!(score_with(utc(2026, 3, 3, 1, 0), &participant, &prefs), 70);
    }

    #[test]
    fn test_score_can_go_negative() {
        let mut raw = Participant::new("p", "UTC", TimeWindowSpec::new("09:00", "17:00"));
        raw.focus_time = Some(TimeWindowSpec::new("09:00", "17:00"));
        raw.meeting_history = vec![utc(2026, 3, 2, 12, 0)];
        let participant = raw.resolve().unwrap();
        let prefs = UserPreferences {
            back_to_back_meetings: false,
            minimum_break_between_meetings: 60,
            max_meetings_per_day: 1,
            ..Default::default()
        };
        // 12:20: 50 - 30 (focus) - 25 (lunch) + 15 (afternoon pattern)
        //        - 40 (back-to-back) - 50 (cap) = -80
        assert_eq!(score_with(utc(2026, 3, 2, 12, 20), &participant, &prefs), -80);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let mut raw = Participant::new("p", "Europe/Berlin", TimeWindowSpec::new("08:00", "16:00"));
        raw.preferred_times = Some(TimeWindowSpec::new("09:00", "11:00"));
        raw.meeting_history = vec![utc(2026, 3, 2, 8, 0), utc(2026, 3, 2, 8, 45)];
        let participant = raw.resolve().unwrap();
        let prefs = UserPreferences::default();
        let instant = utc(2026, 3, 2, 9, 15);
        assert_eq!(
            score_with(instant, &participant, &prefs),
            score_with(instant, &participant, &prefs)
        );
    }
}

//! # Meetwise Core Library
//!
//! This library provides the core logic for Meetwise, a meeting-slot
//! suggestion engine for teams spread across timezones. It implements a
//! CLI-first philosophy where everything is available via a standalone CLI
//! binary over this same library.
//!
//! ## Architecture
//!
//! - **Scheduler**: A pure, synchronous pipeline that walks 30-minute
//!   candidate instants over a 7-day lookahead, scores each one per
//!   participant, and ranks the slots where everyone is available
//! - **Scoring**: Additive integer heuristics over each participant's
//!   local wall-clock time, behind a hard working-hours gate
//! - **Profiles**: Behavioral patterns (day-part preference, meeting
//!   frequency, back-to-back tendency) inferred from meeting history
//!
//! Every invocation is independent and deterministic given the same `now`;
//! the engine holds no state, performs no I/O, and never touches the clock
//! itself.
//!
//! ## Key Components
//!
//! - [`SlotScheduler`]: The suggestion pipeline
//! - [`Participant`] / [`UserPreferences`]: Caller-supplied plain data
//! - [`CandidateSlot`]: Ranked output with per-participant verdicts

pub mod error;
pub mod participant;
pub mod preferences;
pub mod profile;
pub mod request;
pub mod scheduler;
pub mod scoring;
pub mod timeutil;

pub use error::{ConfigError, ScheduleError, ZoneError};
pub use participant::{Participant, ResolvedParticipant, TimeWindowSpec};
pub use preferences::{ResolvedPreferences, UserPreferences};
pub use profile::{BehavioralProfile, DayPart};
pub use request::ScheduleRequest;
pub use scheduler::{CandidateSlot, ParticipantAvailability, SchedulerConfig, SlotScheduler};
pub use scoring::{score_instant, PREFERRED_SCORE_THRESHOLD};
pub use timeutil::{resolve_zone, TimeOfDay, TimeWindow};

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Args;
use meetwise_core::{resolve_zone, ScheduleRequest, SchedulerConfig, SlotScheduler};

#[derive(Args)]
pub struct SuggestArgs {
    /// Path to the schedule request file (.json or .toml)
    #[arg(long)]
    request: PathBuf,
    /// Schedule from this instant (RFC 3339) instead of the current time
    #[arg(long)]
    now: Option<String>,
    /// Maximum number of slots to print
    #[arg(long)]
    limit: Option<usize>,
    /// Print raw JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn run(args: SuggestArgs) -> Result<(), Box<dyn std::error::Error>> {
    let request = ScheduleRequest::load(&args.request)?;
    let now = match &args.now {
        Some(s) => DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc),
        None => Utc::now(),
    };

    let mut config = SchedulerConfig::default();
    if let Some(limit) = args.limit {
        config.max_results = limit;
    }
    let scheduler = SlotScheduler::with_config(config);
    let slots = scheduler.suggest_slots(
        &request.participants,
        request.duration_minutes,
        &request.preferences,
        now,
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&slots)?);
        return Ok(());
    }

    if slots.is_empty() {
        println!("no slot works for every participant in the lookahead window");
        return Ok(());
    }

    for (rank, slot) in slots.iter().enumerate() {
        println!(
            "{:>2}. {}  (score {})",
            rank + 1,
            slot.start_time.format("%a %Y-%m-%d %H:%M UTC"),
            slot.score
        );
        for participant in &request.participants {
            let Some(verdict) = slot.participant_availability.get(&participant.name) else {
                continue;
            };
            let zone = resolve_zone(&participant.timezone)?;
            let local = slot.start_time.with_timezone(&zone);
            let marker = if verdict.is_preferred { "preferred" } else { "ok" };
            println!(
                "      {:<12} {}  [{}]",
                participant.name,
                local.format("%H:%M %Z"),
                marker
            );
        }
    }
    Ok(())
}

use std::path::PathBuf;

use clap::Args;
use meetwise_core::ScheduleRequest;

#[derive(Args)]
pub struct CheckArgs {
    /// Path to the schedule request file (.json or .toml)
    #[arg(long)]
    request: PathBuf,
}

pub fn run(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let request = ScheduleRequest::load(&args.request)?;

    let mut problems = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for participant in &request.participants {
        if !seen.insert(participant.name.as_str()) {
            problems.push(format!("duplicate participant name '{}'", participant.name));
        }
        if let Err(e) = participant.resolve() {
            problems.push(e.to_string());
        }
    }
    if let Err(e) = request.preferences.resolve() {
        problems.push(e.to_string());
    }

    if problems.is_empty() {
        println!(
            "ok: {} participant(s), duration {} min",
            request.participants.len(),
            request.duration_minutes
        );
        return Ok(());
    }

    for problem in &problems {
        println!("problem: {problem}");
    }
    Err(format!("{} problem(s) found", problems.len()).into())
}

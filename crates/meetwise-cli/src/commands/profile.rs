use std::path::PathBuf;

use clap::Args;
use meetwise_core::ScheduleRequest;

#[derive(Args)]
pub struct ProfileArgs {
    /// Path to the schedule request file (.json or .toml)
    #[arg(long)]
    request: PathBuf,
    /// Print raw JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn run(args: ProfileArgs) -> Result<(), Box<dyn std::error::Error>> {
    let request = ScheduleRequest::load(&args.request)?;

    if args.json {
        let mut out = serde_json::Map::new();
        for participant in &request.participants {
            out.insert(
                participant.name.clone(),
                serde_json::to_value(participant.behavioral_profile()?)?,
            );
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for participant in &request.participants {
        let profile = participant.behavioral_profile()?;
        println!("{} ({})", participant.name, participant.timezone);
        match profile.preferred_day_part {
            Some(part) => println!("  preferred day part: {part}"),
            None => println!("  preferred day part: no history"),
        }
        println!("  meetings per day:   {:.2}", profile.meetings_per_day);
        println!(
            "  back-to-back:       {}",
            if profile.back_to_back_tendency {
                "tends to chain meetings"
            } else {
                "keeps gaps"
            }
        );
    }
    Ok(())
}

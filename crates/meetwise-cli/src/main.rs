use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "meetwise", version, about = "Meetwise CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest ranked meeting slots for a request file
    Suggest(commands::suggest::SuggestArgs),
    /// Show behavioral profiles derived from meeting history
    Profile(commands::profile::ProfileArgs),
    /// Validate timezones and time windows in a request file
    Check(commands::check::CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Suggest(args) => commands::suggest::run(args),
        Commands::Profile(args) => commands::profile::run(args),
        Commands::Check(args) => commands::check::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

use clap::{Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "studyplan-cli", version, about = "Studyplan CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan generation and export
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Day-by-day schedule views
    Schedule {
        #[command(subcommand)]
        action: commands::schedule::ScheduleAction,
    },
    /// Per-subject allocation breakdown
    Subjects {
        #[command(subcommand)]
        action: commands::subjects::SubjectsAction,
    },
    /// Weekly focuses and narrative insights
    Insights {
        #[command(subcommand)]
        action: commands::insights::InsightsAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Schedule { action } => commands::schedule::run(action),
        Commands::Subjects { action } => commands::subjects::run(action),
        Commands::Insights { action } => commands::insights::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

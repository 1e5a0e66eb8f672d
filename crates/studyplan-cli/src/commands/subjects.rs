use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;

use crate::common;

#[derive(Subcommand)]
pub enum SubjectsAction {
    /// Show per-subject hour allocation and weekly curves
    Breakdown {
        /// Request file (.toml or .json)
        #[arg(long)]
        input: PathBuf,
        /// Reference date (YYYY-MM-DD); defaults to the local date
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: SubjectsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SubjectsAction::Breakdown { input, today, json } => {
            let plan = common::load_and_generate(&input, today)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&plan.subject_plans)?);
                return Ok(());
            }

            for sp in &plan.subject_plans {
                println!("{} - {}h ({}%)", sp.subject_name, sp.total_hours, sp.percentage_allocation);
                println!("  {}", sp.allocation);
                if !sp.key_topics.is_empty() {
                    println!("  key topics: {}", sp.key_topics.join(", "));
                }
                let weekly: Vec<String> = sp
                    .weekly_breakdown
                    .iter()
                    .enumerate()
                    .map(|(i, h)| format!("W{}: {}h", i + 1, h))
                    .collect();
                if !weekly.is_empty() {
                    println!("  weekly: {}", weekly.join(", "));
                }
                println!(
                    "  expected confidence improvement: +{}",
                    sp.estimated_confidence_improvement
                );
            }
        }
    }
    Ok(())
}

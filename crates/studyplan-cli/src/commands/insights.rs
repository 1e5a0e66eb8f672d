use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;

use crate::common;

#[derive(Subcommand)]
pub enum InsightsAction {
    /// Show weekly focuses, milestones, and study tips
    Show {
        /// Request file (.toml or .json)
        #[arg(long)]
        input: PathBuf,
        /// Reference date (YYYY-MM-DD); defaults to the local date
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

pub fn run(action: InsightsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        InsightsAction::Show { input, today } => {
            let plan = common::load_and_generate(&input, today)?;

            println!("{}", plan.next_week_focus);
            println!("{}", plan.completion_timeline);
            println!("{}", plan.confidence_boost);

            for focus in &plan.weekly_focuses {
                println!("\nWeek {}", focus.week);
                for subject in &focus.subjects {
                    let topics = if subject.focus_topics.is_empty() {
                        String::new()
                    } else {
                        format!(" ({})", subject.focus_topics.join(", "))
                    };
                    println!(
                        "  {} - {}h{} [{}]",
                        subject.subject_name, subject.hours_allocated, topics, subject.priority
                    );
                }
                for milestone in &focus.key_milestones {
                    println!("  * {milestone}");
                }
            }

            println!("\nTips:");
            for (i, tip) in plan.tips.iter().enumerate() {
                println!("{}. {}", i + 1, tip);
            }
        }
    }
    Ok(())
}

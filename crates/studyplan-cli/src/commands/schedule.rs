use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;

use crate::common;

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Show the day-by-day task schedule
    Show {
        /// Request file (.toml or .json)
        #[arg(long)]
        input: PathBuf,
        /// Reference date (YYYY-MM-DD); defaults to the local date
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Print the schedule as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ScheduleAction::Show { input, today, json } => {
            let plan = common::load_and_generate(&input, today)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&plan.schedule)?);
                return Ok(());
            }

            if plan.schedule.is_empty() {
                println!("no tasks scheduled (target date not after today?)");
                return Ok(());
            }

            let mut current_date = None;
            for task in &plan.schedule {
                if current_date != Some(task.date) {
                    println!("{} ({})", task.date, task.day_of_week);
                    current_date = Some(task.date);
                }
                println!(
                    "  {:>4}h  {:<10} {:<24} {} ({} focus)",
                    task.hours, task.task_type, task.subject, task.topic, task.focus_level
                );
            }
        }
    }
    Ok(())
}

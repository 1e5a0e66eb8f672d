use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;
use studyplan_core::StudyPlan;

use crate::common;

#[derive(Subcommand)]
pub enum PlanAction {
    /// Generate a plan from a request file
    Generate {
        /// Request file (.toml or .json)
        #[arg(long)]
        input: PathBuf,
        /// Reference date (YYYY-MM-DD); defaults to the local date
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Print the full plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export the plan as a plain-text document
    Export {
        /// Request file (.toml or .json)
        #[arg(long)]
        input: PathBuf,
        /// Reference date (YYYY-MM-DD); defaults to the local date
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Write the document to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PlanAction::Generate { input, today, json } => {
            let plan = common::load_and_generate(&input, today)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print_overview(&plan);
            }
        }
        PlanAction::Export { input, today, output } => {
            let plan = common::load_and_generate(&input, today)?;
            let document = format_plan_document(&plan);
            match output {
                Some(path) => {
                    std::fs::write(&path, document)?;
                    println!("plan written to {}", path.display());
                }
                None => println!("{document}"),
            }
        }
    }
    Ok(())
}

fn print_overview(plan: &StudyPlan) {
    println!("Study plan for {}", plan.student_name);
    println!("Target date: {}", plan.target_date);
    println!("{}", plan.completion_timeline);
    println!("{}", plan.confidence_boost);
    println!("{}", plan.next_week_focus);
    println!();
    for sp in &plan.subject_plans {
        println!(
            "{}: {}h ({}%) - {}",
            sp.subject_name, sp.total_hours, sp.percentage_allocation, sp.allocation
        );
    }
    println!();
    println!(
        "{} scheduled tasks over {} weeks",
        plan.schedule.len(),
        plan.weekly_focuses.len()
    );
}

/// Render the downloadable plain-text plan document.
pub fn format_plan_document(plan: &StudyPlan) -> String {
    let mut doc = String::new();

    doc.push_str("STUDYPLAN - PERSONALIZED STUDY SCHEDULE\n");
    doc.push_str("=======================================\n\n");
    doc.push_str(&format!("Student: {}\n", plan.student_name));
    doc.push_str(&format!("Target Completion Date: {}\n", plan.target_date));
    doc.push_str(&format!("Days Remaining: {}\n\n", plan.days_remaining));

    doc.push_str("OVERVIEW\n--------\n");
    doc.push_str(&format!("{}\n", plan.completion_timeline));
    doc.push_str(&format!("{}\n\n", plan.confidence_boost));

    doc.push_str("NEXT WEEK FOCUS\n---------------\n");
    doc.push_str(&format!("{}\n\n", plan.next_week_focus));

    doc.push_str("SUBJECT ALLOCATION\n------------------\n");
    for sp in &plan.subject_plans {
        doc.push_str(&format!("\n{}\n", sp.subject_name));
        doc.push_str(&format!(
            "  - Hours: {}h ({}%)\n",
            sp.total_hours, sp.percentage_allocation
        ));
        doc.push_str(&format!("  - {}\n", sp.allocation));
        doc.push_str(&format!("  - Key Topics: {}\n", sp.key_topics.join(", ")));
        doc.push_str(&format!(
            "  - Expected Confidence Improvement: +{} levels\n",
            sp.estimated_confidence_improvement
        ));
    }

    doc.push_str("\nSTUDY TIPS\n----------\n");
    for (i, tip) in plan.tips.iter().enumerate() {
        doc.push_str(&format!("{}. {}\n", i + 1, tip));
    }

    doc
}

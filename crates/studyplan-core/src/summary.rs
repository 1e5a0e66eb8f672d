//! Weekly focus groupings and narrative insight strings.
//!
//! Everything here is derived from the sorted scored subjects and their
//! plans, not from the placed schedule. In particular the weekly focuses
//! list the same top-2 subjects every week; that mirrors the behavior the
//! engine was specified against and is deliberately not made adaptive
//! (recorded as an open question in DESIGN.md).

use serde::{Deserialize, Serialize};

use crate::allocator::SubjectPlan;
use crate::scoring::ScoredSubject;

/// Subjects listed per weekly focus.
const SUBJECTS_PER_WEEK: usize = 2;
/// Share of a subject's weekly hours surfaced in the focus card.
const FOCUS_HOURS_FACTOR: f64 = 0.7;

/// One subject's entry within a weekly focus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklySubjectFocus {
    pub subject_name: String,
    pub focus_topics: Vec<String>,
    pub hours_allocated: i64,
    pub priority: String,
}

/// Presentation grouping for one week of the plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyFocus {
    /// 1-based week number.
    pub week: u32,
    pub subjects: Vec<WeeklySubjectFocus>,
    pub key_milestones: Vec<String>,
}

/// Build one focus entry per remaining week.
///
/// `subjects` must be sorted by descending priority; `weeks` is the ceiled
/// whole-week count and may be zero, yielding no focuses.
pub fn build_weekly_focuses(
    subjects: &[ScoredSubject],
    plans: &[SubjectPlan],
    weeks: i64,
) -> Vec<WeeklyFocus> {
    let mut focuses = Vec::new();

    for week in 1..=weeks.max(0) {
        let week = week as u32;
        let top_subjects: Vec<WeeklySubjectFocus> = subjects
            .iter()
            .take(SUBJECTS_PER_WEEK)
            .map(|scored| {
                let total_hours = plans
                    .iter()
                    .find(|p| p.subject_name == scored.subject.name)
                    .map(|p| p.total_hours)
                    .unwrap_or(0);
                WeeklySubjectFocus {
                    subject_name: scored.subject.name.clone(),
                    focus_topics: scored.focus_topics(2),
                    hours_allocated: (total_hours as f64 / weeks as f64 * FOCUS_HOURS_FACTOR)
                        .round() as i64,
                    priority: if scored.subject.confidence_level <= 2 {
                        "High Priority".to_string()
                    } else {
                        "Medium Priority".to_string()
                    },
                }
            })
            .collect();

        let top_name = subjects
            .first()
            .map(|s| s.subject.name.as_str())
            .unwrap_or_default();
        focuses.push(WeeklyFocus {
            week,
            subjects: top_subjects,
            key_milestones: vec![
                format!("Complete foundational topics in {top_name}"),
                "Start practice problems for weak areas".to_string(),
                format!("Review and consolidate Week {week} concepts"),
            ],
        });
    }

    focuses
}

/// Headline for the coming week, from the top subject's first topics.
pub fn next_week_focus(subjects: &[ScoredSubject]) -> String {
    let topics = subjects
        .first()
        .map(|top| {
            let focus = top.focus_topics(2);
            if focus.is_empty() {
                top.subject.name.clone()
            } else {
                focus.join(", ")
            }
        })
        .unwrap_or_default();
    format!("Next 7 days focus: {topics}")
}

/// Timeline summary embedding the remaining days and hour budget.
pub fn completion_timeline(days_remaining: i64, total_available_hours: f64) -> String {
    format!(
        "{days_remaining} days remaining | ~{} total study hours available",
        total_available_hours.round() as i64
    )
}

/// Mean confidence-improvement estimate across all subject plans.
pub fn confidence_boost(plans: &[SubjectPlan]) -> String {
    let sum: i64 = plans.iter().map(|p| p.estimated_confidence_improvement).sum();
    let avg = (sum as f64 / plans.len() as f64).round() as i64;
    format!("Expected confidence improvement: +{avg} levels across subjects")
}

/// Fixed, non-personalized study tips shown with every plan.
pub fn study_tips() -> Vec<String> {
    [
        "Schedule high-focus topics during your preferred study time for maximum effectiveness.",
        "Review weak areas from previous weeks before moving to new topics.",
        "Take 5-10 minute breaks every 45-50 minutes to maintain focus and retention.",
        "Use active recall and spaced repetition for better long-term retention.",
        "Adjust your schedule if confidence levels change - track weekly checkpoints.",
    ]
    .iter()
    .map(|t| t.to_string())
    .collect()
}

//! Proportional hour allocation across subjects.
//!
//! Each subject receives a share of the total available hours proportional
//! to its priority score, then that share is spread over the remaining
//! weeks with a front-loaded taper: week `i` of `n` gets
//! `round(weekly * (1 - (i/n) * 0.2))`, so the last week carries up to 20%
//! fewer hours than the first. The weekly values are rounded independently
//! and never re-normalized, so their sum can drift from the subject total;
//! the same goes for percentage shares summing to ~100. Both drifts are
//! observable behavior and kept as-is.
//!
//! Precondition: at least one subject. With an empty list the percentage
//! division is 0/0 and the result follows IEEE NaN semantics; the caller
//! guarantees this does not happen.

use serde::{Deserialize, Serialize};

use crate::scoring::ScoredSubject;

/// Hours of study that move the confidence estimate by one level.
const HOURS_PER_CONFIDENCE_LEVEL: f64 = 50.0;
/// Maximum number of key topics surfaced per subject.
const MAX_KEY_TOPICS: usize = 3;

/// Per-subject output of the allocator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectPlan {
    pub subject_name: String,
    /// Allocated hours, rounded.
    pub total_hours: i64,
    /// Share of total available hours, rounded percent.
    pub percentage_allocation: i64,
    /// Human-readable rationale for the share.
    pub allocation: String,
    /// Up to 3 topics, weak areas first.
    pub key_topics: Vec<String>,
    /// Hour estimate per remaining week, front-loaded.
    pub weekly_breakdown: Vec<i64>,
    /// Expected confidence gain, 0 to (5 - confidence_level).
    pub estimated_confidence_improvement: i64,
}

/// Distribute `total_available_hours` across subjects by priority score.
///
/// `subjects` must already be sorted by descending priority; the returned
/// plans are in the same order. `weeks_remaining` may be fractional and is
/// ceiled to whole weeks for the breakdown.
pub fn allocate(
    subjects: &[ScoredSubject],
    total_available_hours: f64,
    weeks_remaining: f64,
) -> Vec<SubjectPlan> {
    let score_sum: f64 = subjects.iter().map(|s| s.priority_score).sum();
    let weeks = weeks_remaining.ceil() as i64;

    subjects
        .iter()
        .map(|scored| {
            let allocation_percentage = scored.priority_score / score_sum * 100.0;
            let allocated_hours = allocation_percentage / 100.0 * total_available_hours;

            let key_topics = key_topics(scored);
            let weekly_breakdown = weekly_breakdown(allocated_hours, weeks);

            let improvement_potential = (5 - scored.subject.confidence_level) as i64;
            let estimated_confidence_improvement = improvement_potential.min(
                (improvement_potential as f64 * (allocated_hours / HOURS_PER_CONFIDENCE_LEVEL))
                    .round() as i64,
            );

            SubjectPlan {
                subject_name: scored.subject.name.clone(),
                total_hours: allocated_hours.round() as i64,
                percentage_allocation: allocation_percentage.round() as i64,
                allocation: allocation_rationale(scored).to_string(),
                key_topics,
                weekly_breakdown,
                estimated_confidence_improvement,
            }
        })
        .collect()
}

/// Weak-area topics first, topped up from strong areas, at most 3 total.
fn key_topics(scored: &ScoredSubject) -> Vec<String> {
    let mut topics = scored.weak_topics.clone();
    if topics.len() < MAX_KEY_TOPICS {
        let room = MAX_KEY_TOPICS - topics.len();
        topics.extend(scored.strong_topics.iter().take(room).cloned());
    }
    topics.truncate(MAX_KEY_TOPICS);
    topics
}

/// Spread hours over whole weeks with the 20% end-of-window taper.
fn weekly_breakdown(allocated_hours: f64, weeks: i64) -> Vec<i64> {
    if weeks <= 0 {
        return Vec::new();
    }
    let weekly_hours = allocated_hours / weeks as f64;
    (0..weeks)
        .map(|week| {
            let progress_factor = week as f64 / weeks as f64;
            (weekly_hours * (1.0 - progress_factor * 0.2)).round() as i64
        })
        .collect()
}

/// Rationale string keyed on (low confidence, high credits).
fn allocation_rationale(scored: &ScoredSubject) -> &'static str {
    let low_confidence = scored.subject.confidence_level <= 2;
    let high_credits = scored.subject.credits >= 4;
    match (low_confidence, high_credits) {
        (true, true) => {
            "High priority: Low confidence + High credits. Intensive focus on foundational concepts and weak areas."
        }
        (true, false) => {
            "Medium-high priority: Low confidence. Focus on understanding weak topics thoroughly."
        }
        (false, true) => {
            "Medium priority: Higher credits require more time. Balanced learning and practice approach."
        }
        (false, false) => {
            "Medium-low priority: Good confidence, lighter load to consolidate understanding."
        }
    }
}

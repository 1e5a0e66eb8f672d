//! Priority scoring for subjects.
//!
//! Each subject gets a weighted composite score in [0, 1]:
//!
//! ```text
//! score = 0.4 * confidence_factor + 0.4 * credits_factor + 0.2 * weak_area_bonus
//! ```
//!
//! Where:
//! - `confidence_factor = (5 - confidence_level) / 5` (lower confidence raises priority)
//! - `credits_factor = credits / 8`
//! - `weak_area_bonus = 0.3` when the subject has any weak areas, else 0
//!
//! Alongside the score, each subject is bucketed into a cognitive level
//! (0 = foundational, 1 = developing, 2 = comfortable) from its confidence.

use serde::{Deserialize, Serialize};

use crate::input::Subject;

/// Weight on the confidence deficit term.
const CONFIDENCE_WEIGHT: f64 = 0.4;
/// Weight on the credit-load term.
const CREDITS_WEIGHT: f64 = 0.4;
/// Weight on the weak-area bonus term.
const WEAK_AREA_WEIGHT: f64 = 0.2;
/// Bonus value granted when weak areas are present.
const WEAK_AREA_BONUS: f64 = 0.3;

/// A subject with its derived priority score and parsed topic lists.
///
/// Topic lists are parsed here, once, from the subject's free-text fields;
/// the allocator, scheduler, and summary builder all read these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredSubject {
    pub subject: Subject,
    /// Composite priority in [0, 1] for in-range inputs.
    pub priority_score: f64,
    /// Confidence bucket: 0 if confidence <= 2, 1 if <= 3, else 2.
    pub cognitive_level_index: u8,
    pub weak_topics: Vec<String>,
    pub strong_topics: Vec<String>,
}

impl ScoredSubject {
    /// Score a subject. Assumes credits in 1-8 and confidence in 1-5;
    /// ranges are the caller's responsibility.
    pub fn score(subject: Subject) -> Self {
        let weak_topics = subject.weak_topics();
        let strong_topics = subject.strong_topics();

        let confidence_factor = (5 - subject.confidence_level) as f64 / 5.0;
        let credits_factor = subject.credits as f64 / 8.0;
        let weak_area_bonus = if weak_topics.is_empty() { 0.0 } else { WEAK_AREA_BONUS };

        let priority_score = CONFIDENCE_WEIGHT * confidence_factor
            + CREDITS_WEIGHT * credits_factor
            + WEAK_AREA_WEIGHT * weak_area_bonus;

        let cognitive_level_index = match subject.confidence_level {
            0..=2 => 0,
            3 => 1,
            _ => 2,
        };

        Self {
            subject,
            priority_score,
            cognitive_level_index,
            weak_topics,
            strong_topics,
        }
    }

    /// Topics to cycle through when generating tasks: weak areas, falling
    /// back to strong areas when there are none.
    pub fn task_topics(&self) -> &[String] {
        if self.weak_topics.is_empty() {
            &self.strong_topics
        } else {
            &self.weak_topics
        }
    }

    /// First `limit` task topics, for focus summaries.
    pub fn focus_topics(&self, limit: usize) -> Vec<String> {
        self.task_topics().iter().take(limit).cloned().collect()
    }
}

/// Score every subject, preserving input order.
pub fn score_subjects(subjects: &[Subject]) -> Vec<ScoredSubject> {
    subjects.iter().cloned().map(ScoredSubject::score).collect()
}

/// Sort scored subjects by descending priority.
///
/// The sort is stable: equal scores keep their input order, which makes
/// allocation and queue order deterministic.
pub fn sort_by_priority(subjects: &mut [ScoredSubject]) {
    subjects.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));
}

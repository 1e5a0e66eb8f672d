//! Greedy task scheduling onto calendar days.
//!
//! Scheduling runs in two phases:
//! 1. Build a task queue: each subject contributes `ceil(total_hours / 1.5)`
//!    tasks cycling through its topics, concatenated in subject-priority
//!    order. A task's priority is positional within its subject's run
//!    (first 40% high, to 70% medium, rest low).
//! 2. Walk the calendar from `today` to the target date, filling each day
//!    with up to 3 tasks under the day's hour cap (weekday or weekend
//!    budget). A task truncated to 0.5h or less is consumed from the queue
//!    without being placed; whatever is left in the queue when the target
//!    date passes is dropped. The schedule is best-effort under capacity,
//!    not a guarantee that every allocated hour lands on a day.
//!
//! A task's type (learning/practice/revision/buffer) comes from its
//! position in the *queue*, not in the placed schedule, splitting the run
//! of all tasks 40/30/20/10.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::allocator::SubjectPlan;
use crate::input::Availability;
use crate::scoring::ScoredSubject;

/// Scheduling granularity: nominal hours per task.
pub const TASK_HOURS: f64 = 1.5;
/// Tasks truncated to this duration or less are dropped.
pub const MIN_TASK_HOURS: f64 = 0.5;
/// Cap on tasks placed per calendar day.
pub const MAX_TASKS_PER_DAY: usize = 3;

/// Relative priority of a task, also used as its focus level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            TaskPriority::High => "high",
            TaskPriority::Medium => "medium",
            TaskPriority::Low => "low",
        })
    }
}

/// Study phase of a task, derived from queue position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Learning,
    Practice,
    Revision,
    Buffer,
}

impl TaskType {
    /// Phase for the task at `index` in a queue of `len` tasks:
    /// first 40% learning, to 70% practice, to 90% revision, rest buffer.
    pub fn from_queue_position(index: usize, len: usize) -> Self {
        let progress = index as f64 / len as f64;
        if progress < 0.4 {
            TaskType::Learning
        } else if progress < 0.7 {
            TaskType::Practice
        } else if progress < 0.9 {
            TaskType::Revision
        } else {
            TaskType::Buffer
        }
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            TaskType::Learning => "learning",
            TaskType::Practice => "practice",
            TaskType::Revision => "revision",
            TaskType::Buffer => "buffer",
        })
    }
}

/// A task waiting for a calendar slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueuedTask {
    pub subject_id: String,
    pub subject: String,
    pub topic: String,
    pub priority: TaskPriority,
}

/// A task placed on a calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTask {
    pub date: NaiveDate,
    pub day_of_week: String,
    pub subject: String,
    pub topic: String,
    pub task_type: TaskType,
    /// Placed duration; at most 1.5, less when truncated by the day cap.
    pub hours: f64,
    pub priority: TaskPriority,
    pub focus_level: TaskPriority,
}

/// Build the global task queue in subject-priority order.
///
/// `subjects` must be sorted by descending priority and `plans` aligned
/// with it (both are outputs of the scoring/allocation stages).
pub fn build_task_queue(subjects: &[ScoredSubject], plans: &[SubjectPlan]) -> Vec<QueuedTask> {
    let mut queue = Vec::new();

    for scored in subjects {
        let hours = plans
            .iter()
            .find(|p| p.subject_name == scored.subject.name)
            .map(|p| p.total_hours)
            .unwrap_or(0);
        let tasks_needed = (hours as f64 / TASK_HOURS).ceil() as usize;

        let topics = scored.task_topics();
        let high_cutoff = (tasks_needed as f64 * 0.4).ceil() as usize;
        let medium_cutoff = (tasks_needed as f64 * 0.7).ceil() as usize;

        for i in 0..tasks_needed {
            let topic = if topics.is_empty() {
                scored.subject.name.clone()
            } else {
                topics[i % topics.len()].clone()
            };
            let priority = if i < high_cutoff {
                TaskPriority::High
            } else if i < medium_cutoff {
                TaskPriority::Medium
            } else {
                TaskPriority::Low
            };
            queue.push(QueuedTask {
                subject_id: scored.subject.id.clone(),
                subject: scored.subject.name.clone(),
                topic,
                priority,
            });
        }
    }

    queue
}

/// Place queued tasks onto days from `today` through `target_date`.
///
/// Returns tasks in non-decreasing date order, queue order within a day.
/// A target date on or before `today` yields an empty schedule.
pub fn place_tasks(
    queue: &[QueuedTask],
    availability: &Availability,
    today: NaiveDate,
    target_date: NaiveDate,
) -> Vec<DailyTask> {
    if target_date <= today {
        return Vec::new();
    }

    let mut schedule = Vec::new();
    let mut queue_index = 0;
    let mut date = today;

    while date <= target_date && queue_index < queue.len() {
        let capacity = if is_weekend(date) {
            availability.weekend_hours
        } else {
            availability.weekday_hours
        };
        let mut hours_used = 0.0;

        for _ in 0..MAX_TASKS_PER_DAY {
            if queue_index >= queue.len() {
                break;
            }
            let task = &queue[queue_index];
            let position = queue_index;
            queue_index += 1;

            let hours = TASK_HOURS.min(capacity - hours_used);
            if hours <= MIN_TASK_HOURS {
                // Lossy truncation: consumed from the queue, never placed.
                continue;
            }

            schedule.push(DailyTask {
                date,
                day_of_week: date.format("%A").to_string(),
                subject: task.subject.clone(),
                topic: task.topic.clone(),
                task_type: TaskType::from_queue_position(position, queue.len()),
                hours,
                priority: task.priority,
                focus_level: task.priority,
            });
            hours_used += hours;
        }

        date += Duration::days(1);
    }

    schedule
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::allocate;
    use crate::input::Subject;
    use crate::scoring::{sort_by_priority, ScoredSubject};

    fn scored_subject(name: &str, credits: u8, confidence: u8, weak: &str) -> ScoredSubject {
        ScoredSubject::score(Subject {
            id: name.to_lowercase(),
            name: name.to_string(),
            credits,
            strong_areas: "Basics".to_string(),
            weak_areas: weak.to_string(),
            confidence_level: confidence,
        })
    }

    fn availability(weekday: f64, weekend: f64, target: NaiveDate) -> Availability {
        Availability {
            weekday_hours: weekday,
            weekend_hours: weekend,
            preferred_time: String::new(),
            target_date: target,
        }
    }

    fn plan_for(name: &str, total_hours: i64) -> SubjectPlan {
        SubjectPlan {
            subject_name: name.to_string(),
            total_hours,
            percentage_allocation: 100,
            allocation: String::new(),
            key_topics: Vec::new(),
            weekly_breakdown: Vec::new(),
            estimated_confidence_improvement: 0,
        }
    }

    #[test]
    fn queue_length_covers_allocated_hours() {
        let subjects = vec![scored_subject("Maths", 5, 2, "Calculus,Algebra")];
        let queue = build_task_queue(&subjects, &[plan_for("Maths", 10)]);
        // ceil(10 / 1.5) = 7 tasks
        assert_eq!(queue.len(), 7);
    }

    #[test]
    fn queue_cycles_topics_modulo() {
        let subjects = vec![scored_subject("Maths", 5, 2, "A,B")];
        let queue = build_task_queue(&subjects, &[plan_for("Maths", 6)]);
        let topics: Vec<_> = queue.iter().map(|t| t.topic.as_str()).collect();
        assert_eq!(topics, ["A", "B", "A", "B"]);
    }

    #[test]
    fn queue_priorities_follow_positional_split() {
        let subjects = vec![scored_subject("Maths", 5, 2, "A")];
        let queue = build_task_queue(&subjects, &[plan_for("Maths", 15)]);
        assert_eq!(queue.len(), 10);
        let highs = queue.iter().filter(|t| t.priority == TaskPriority::High).count();
        let mediums = queue.iter().filter(|t| t.priority == TaskPriority::Medium).count();
        let lows = queue.iter().filter(|t| t.priority == TaskPriority::Low).count();
        assert_eq!((highs, mediums, lows), (4, 3, 3));
        // Runs are contiguous: high first, then medium, then low.
        assert_eq!(queue[0].priority, TaskPriority::High);
        assert_eq!(queue[4].priority, TaskPriority::Medium);
        assert_eq!(queue[9].priority, TaskPriority::Low);
    }

    #[test]
    fn queue_concatenates_in_subject_priority_order() {
        let mut subjects = vec![
            scored_subject("Easy", 2, 5, ""),
            scored_subject("Hard", 8, 1, "X"),
        ];
        sort_by_priority(&mut subjects);
        let plans = allocate(&subjects, 30.0, 2.0);
        let queue = build_task_queue(&subjects, &plans);
        assert!(!queue.is_empty());
        assert_eq!(queue[0].subject, "Hard");
        let first_easy = queue.iter().position(|t| t.subject == "Easy").unwrap();
        assert!(queue[first_easy..].iter().all(|t| t.subject == "Easy"));
    }

    #[test]
    fn task_type_split_over_queue() {
        assert_eq!(TaskType::from_queue_position(0, 10), TaskType::Learning);
        assert_eq!(TaskType::from_queue_position(3, 10), TaskType::Learning);
        assert_eq!(TaskType::from_queue_position(4, 10), TaskType::Practice);
        assert_eq!(TaskType::from_queue_position(6, 10), TaskType::Practice);
        assert_eq!(TaskType::from_queue_position(7, 10), TaskType::Revision);
        assert_eq!(TaskType::from_queue_position(8, 10), TaskType::Revision);
        assert_eq!(TaskType::from_queue_position(9, 10), TaskType::Buffer);
    }

    #[test]
    fn empty_schedule_when_target_not_after_today() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
        let subjects = vec![scored_subject("Maths", 5, 2, "A")];
        let queue = build_task_queue(&subjects, &[plan_for("Maths", 10)]);
        let avail = availability(3.0, 6.0, today);
        assert!(place_tasks(&queue, &avail, today, today).is_empty());
        let yesterday = today - Duration::days(1);
        assert!(place_tasks(&queue, &avail, today, yesterday).is_empty());
    }

    #[test]
    fn dates_stay_in_window_and_non_decreasing() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
        let target = today + Duration::days(14);
        let subjects = vec![scored_subject("Maths", 5, 1, "A,B,C")];
        let queue = build_task_queue(&subjects, &[plan_for("Maths", 60)]);
        let schedule = place_tasks(&queue, &availability(3.0, 6.0, target), today, target);
        assert!(!schedule.is_empty());
        for task in &schedule {
            assert!(task.date >= today && task.date <= target);
        }
        for pair in schedule.windows(2) {
            assert!(pair[0].date <= pair[1].date);
        }
    }

    #[test]
    fn daily_hours_respect_capacity() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(); // a Monday
        let target = today + Duration::days(13);
        let subjects = vec![scored_subject("Maths", 8, 1, "A")];
        let queue = build_task_queue(&subjects, &[plan_for("Maths", 80)]);
        let avail = availability(3.0, 6.0, target);
        let schedule = place_tasks(&queue, &avail, today, target);

        let mut by_date: std::collections::BTreeMap<NaiveDate, f64> = Default::default();
        for task in &schedule {
            *by_date.entry(task.date).or_default() += task.hours;
        }
        for (date, hours) in by_date {
            let cap = if is_weekend(date) { 6.0 } else { 3.0 };
            assert!(hours <= cap + 1e-9, "{date} overbooked: {hours} > {cap}");
        }
    }

    #[test]
    fn truncated_tail_task_is_consumed_not_requeued() {
        // Weekday cap 3.0: two 1.5h tasks fill the day, the third pop
        // truncates to 0 and is dropped from the queue.
        let today = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(); // Monday
        let target = today + Duration::days(1);
        let subjects = vec![scored_subject("Maths", 5, 2, "A,B,C")];
        let queue = build_task_queue(&subjects, &[plan_for("Maths", 9)]); // 6 tasks
        let avail = availability(3.0, 3.0, target);
        let schedule = place_tasks(&queue, &avail, today, target);

        // Day 1: A, B placed, C consumed-and-dropped. Day 2: A, B placed,
        // C consumed-and-dropped (topics restart at index 3 % 3).
        let topics: Vec<_> = schedule.iter().map(|t| t.topic.as_str()).collect();
        assert_eq!(topics, ["A", "B", "A", "B"]);
        assert_eq!(schedule.len(), 4);
    }

    #[test]
    fn at_most_three_tasks_per_day() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
        let target = today + Duration::days(2);
        let subjects = vec![scored_subject("Maths", 5, 2, "A")];
        let queue = build_task_queue(&subjects, &[plan_for("Maths", 30)]);
        let schedule = place_tasks(&queue, &availability(12.0, 12.0, target), today, target);
        let mut counts: std::collections::BTreeMap<NaiveDate, usize> = Default::default();
        for task in &schedule {
            *counts.entry(task.date).or_default() += 1;
        }
        assert!(counts.values().all(|&c| c <= MAX_TASKS_PER_DAY));
    }

    #[test]
    fn overflow_tasks_are_silently_dropped() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
        let target = today + Duration::days(2); // 3 schedulable days
        let subjects = vec![scored_subject("Maths", 8, 1, "A")];
        let queue = build_task_queue(&subjects, &[plan_for("Maths", 100)]);
        let schedule = place_tasks(&queue, &availability(12.0, 12.0, target), today, target);
        assert!(schedule.len() < queue.len());
        assert!(schedule.len() <= 3 * MAX_TASKS_PER_DAY);
    }
}

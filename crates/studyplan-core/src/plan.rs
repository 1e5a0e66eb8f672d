//! Plan assembly: the single entry point of the engine.
//!
//! `generate_plan` runs the four stages strictly forward — score, allocate,
//! schedule, summarize — and returns the aggregate `StudyPlan`. It is a
//! pure function of the request and the injected `today` date: the same
//! inputs always produce the same plan.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::allocator::{allocate, SubjectPlan};
use crate::input::{Availability, PlanRequest};
use crate::scheduler::{build_task_queue, place_tasks, DailyTask};
use crate::scoring::{score_subjects, sort_by_priority};
use crate::summary::{
    build_weekly_focuses, completion_timeline, confidence_boost, next_week_focus, study_tips,
    WeeklyFocus,
};

/// Weekdays counted per week of availability.
const WEEKDAYS_PER_WEEK: f64 = 5.0;
/// Weekend days counted per week of availability.
const WEEKEND_DAYS_PER_WEEK: f64 = 2.0;

/// The generated plan; sole output of the engine, read-only downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPlan {
    pub student_name: String,
    pub target_date: NaiveDate,
    pub days_remaining: i64,
    /// Total study hours in the window, rounded.
    pub total_available_hours: i64,
    /// Dated tasks in non-decreasing date order.
    pub schedule: Vec<DailyTask>,
    pub weekly_focuses: Vec<WeeklyFocus>,
    /// Per-subject allocations, in descending priority order.
    pub subject_plans: Vec<SubjectPlan>,
    pub next_week_focus: String,
    pub completion_timeline: String,
    pub confidence_boost: String,
    pub tips: Vec<String>,
}

/// Time window derived from the availability and the reference date.
#[derive(Debug, Clone, Copy)]
pub struct PlanHorizon {
    pub days_remaining: i64,
    /// Fractional weeks; ceiled where whole weeks are needed.
    pub weeks_remaining: f64,
    pub total_available_hours: f64,
}

impl PlanHorizon {
    pub fn new(availability: &Availability, today: NaiveDate) -> Self {
        let days_remaining = (availability.target_date - today).num_days();
        let weeks_remaining = days_remaining as f64 / 7.0;
        let total_available_hours = availability.weekday_hours
            * WEEKDAYS_PER_WEEK
            * weeks_remaining
            + availability.weekend_hours * WEEKEND_DAYS_PER_WEEK * weeks_remaining;
        Self {
            days_remaining,
            weeks_remaining,
            total_available_hours,
        }
    }

    /// Whole weeks remaining, rounded up.
    pub fn weeks(&self) -> i64 {
        self.weeks_remaining.ceil() as i64
    }
}

/// Generate a complete study plan for the request as of `today`.
///
/// Precondition: the request passed `PlanRequest::validate`; in particular
/// it holds at least one subject (with none, percentage allocation divides
/// by a zero score sum and the numeric output degenerates to NaN).
pub fn generate_plan(request: &PlanRequest, today: NaiveDate) -> StudyPlan {
    let horizon = PlanHorizon::new(&request.availability, today);

    let mut scored = score_subjects(&request.subjects);
    sort_by_priority(&mut scored);

    let subject_plans = allocate(&scored, horizon.total_available_hours, horizon.weeks_remaining);

    let queue = build_task_queue(&scored, &subject_plans);
    let schedule = place_tasks(
        &queue,
        &request.availability,
        today,
        request.availability.target_date,
    );

    let weekly_focuses = build_weekly_focuses(&scored, &subject_plans, horizon.weeks());

    StudyPlan {
        student_name: request.student.name.clone(),
        target_date: request.availability.target_date,
        days_remaining: horizon.days_remaining,
        total_available_hours: horizon.total_available_hours.round() as i64,
        schedule,
        weekly_focuses,
        next_week_focus: next_week_focus(&scored),
        completion_timeline: completion_timeline(
            horizon.days_remaining,
            horizon.total_available_hours,
        ),
        confidence_boost: confidence_boost(&subject_plans),
        subject_plans,
        tips: study_tips(),
    }
}

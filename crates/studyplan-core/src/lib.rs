//! # Studyplan Core Library
//!
//! This library turns a student's self-reported subjects, confidence
//! levels, and daily time budget into a day-by-day study calendar up to a
//! target date. It is a pure, single-shot engine: one call, one plan, no
//! I/O and no shared state, so it is trivially safe to invoke concurrently
//! for different requests. The CLI binary is a thin layer over this crate.
//!
//! ## Pipeline
//!
//! Data flows strictly forward through four stages:
//!
//! 1. **Scoring** ([`scoring`]): weighted priority score per subject
//! 2. **Allocation** ([`allocator`]): proportional hour shares and weekly curves
//! 3. **Scheduling** ([`scheduler`]): greedy placement of 1.5h tasks onto days
//! 4. **Summary** ([`summary`]): weekly focuses and narrative insights
//!
//! ## Key Components
//!
//! - [`PlanRequest`]: validated input (student, subjects, availability)
//! - [`generate_plan`]: the engine entry point, deterministic for a fixed `today`
//! - [`StudyPlan`]: the aggregate result consumed by renderers

pub mod input;
pub mod scoring;
pub mod allocator;
pub mod scheduler;
pub mod summary;
pub mod plan;
pub mod error;

pub use input::{parse_topics, Availability, PlanRequest, StudentData, Subject};
pub use scoring::{score_subjects, sort_by_priority, ScoredSubject};
pub use allocator::{allocate, SubjectPlan};
pub use scheduler::{
    build_task_queue, place_tasks, DailyTask, QueuedTask, TaskPriority, TaskType,
    MAX_TASKS_PER_DAY, MIN_TASK_HOURS, TASK_HOURS,
};
pub use summary::{study_tips, WeeklyFocus, WeeklySubjectFocus};
pub use plan::{generate_plan, PlanHorizon, StudyPlan};
pub use error::{CoreError, Result, ValidationError};

//! Plan request types: student details, subjects, and availability.
//!
//! These are the immutable inputs to the plan engine. Topic lists arrive as
//! comma-separated free text and are parsed exactly once, at this boundary,
//! into ordered trimmed strings; downstream stages never re-split them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Student identity details.
///
/// Carried through to the generated plan for display; only `name` is read
/// by the engine itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentData {
    pub name: String,
    pub college: String,
    pub branch: String,
    pub graduation_year: i32,
    pub email: String,
}

/// A subject the student is preparing for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Credit load, 1-8.
    pub credits: u8,
    /// Comma-separated topics the student is comfortable with.
    #[serde(default)]
    pub strong_areas: String,
    /// Comma-separated topics the student struggles with.
    #[serde(default)]
    pub weak_areas: String,
    /// Self-reported confidence, 1-5 (1 = weakest).
    pub confidence_level: u8,
}

impl Subject {
    /// Parsed weak-area topics, in input order.
    pub fn weak_topics(&self) -> Vec<String> {
        parse_topics(&self.weak_areas)
    }

    /// Parsed strong-area topics, in input order.
    pub fn strong_topics(&self) -> Vec<String> {
        parse_topics(&self.strong_areas)
    }
}

/// Split a comma-separated topic list into trimmed entries.
///
/// An empty input yields no topics. Empty entries between commas are kept
/// as-is; the engine tolerates them rather than sanitizing further.
pub fn parse_topics(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|t| t.trim().to_string()).collect()
}

/// Daily time budget and the target completion date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Availability {
    /// Study hours available per weekday.
    pub weekday_hours: f64,
    /// Study hours available per weekend day.
    pub weekend_hours: f64,
    /// Preferred study time of day; display only, not used by scheduling.
    #[serde(default)]
    pub preferred_time: String,
    pub target_date: NaiveDate,
}

/// Complete input to one plan generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub student: StudentData,
    pub subjects: Vec<Subject>,
    pub availability: Availability,
}

impl PlanRequest {
    /// Validate the request against the wizard's rules.
    ///
    /// The engine performs no validation of its own; callers run this
    /// before `generate_plan`. `today` is the reference date the target
    /// date must be strictly after.
    pub fn validate(&self, today: NaiveDate) -> Result<(), ValidationError> {
        if self.student.name.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "Name" });
        }
        if self.student.college.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "College name" });
        }
        if self.student.branch.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "Branch/Program" });
        }
        if self.student.email.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "Email" });
        }
        if !looks_like_email(&self.student.email) {
            return Err(ValidationError::InvalidEmail(self.student.email.clone()));
        }
        if self.student.graduation_year < 2024 {
            return Err(ValidationError::GraduationYearTooEarly {
                min: 2024,
                value: self.student.graduation_year,
            });
        }

        if self.subjects.is_empty() {
            return Err(ValidationError::NoSubjects);
        }
        for subject in &self.subjects {
            if subject.name.trim().is_empty() {
                return Err(ValidationError::MissingField { field: "Subject name" });
            }
            if !(1..=8).contains(&subject.credits) {
                return Err(ValidationError::OutOfRange {
                    field: "Credits",
                    min: 1,
                    max: 8,
                    value: subject.credits as i64,
                });
            }
            if !(1..=5).contains(&subject.confidence_level) {
                return Err(ValidationError::OutOfRange {
                    field: "Confidence level",
                    min: 1,
                    max: 5,
                    value: subject.confidence_level as i64,
                });
            }
        }

        if self.availability.weekday_hours < 1.0 || self.availability.weekday_hours > 12.0 {
            return Err(ValidationError::OutOfRange {
                field: "Weekday hours",
                min: 1,
                max: 12,
                value: self.availability.weekday_hours as i64,
            });
        }
        if self.availability.weekend_hours < 1.0 || self.availability.weekend_hours > 16.0 {
            return Err(ValidationError::OutOfRange {
                field: "Weekend hours",
                min: 1,
                max: 16,
                value: self.availability.weekend_hours as i64,
            });
        }
        if self.availability.target_date <= today {
            return Err(ValidationError::TargetDateNotInFuture {
                target: self.availability.target_date,
                today,
            });
        }

        Ok(())
    }
}

/// Minimal address-shape check: one `@`, non-empty local part, and a dotted
/// domain with non-empty labels around the last dot.
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

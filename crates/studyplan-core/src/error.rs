//! Core error types for studyplan-core.
//!
//! The plan engine itself is infallible for validated input; errors arise
//! at the boundary when a plan request is loaded and validated.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studyplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Failed to read a plan request file
    #[error("Failed to read request file {path}: {source}")]
    RequestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a plan request file
    #[error("Failed to parse request file {path}: {message}")]
    RequestParse { path: PathBuf, message: String },

    /// Request file extension is not a supported format
    #[error("Unsupported request format for {path}: expected .toml or .json")]
    UnsupportedFormat { path: PathBuf },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Validation errors for plan requests.
///
/// These mirror the checks the input wizard performs before the engine is
/// invoked; the engine assumes a request that passed them.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required text field is empty
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// Email does not look like an address
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    /// Graduation year is in the past
    #[error("Graduation year must be {min} or later, got {value}")]
    GraduationYearTooEarly { min: i32, value: i32 },

    /// No subjects in the request
    #[error("At least one subject is required")]
    NoSubjects,

    /// Numeric field outside its allowed range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },

    /// Target date is not after the reference date
    #[error("Target date {target} must be after {today}")]
    TargetDateNotInFuture {
        target: chrono::NaiveDate,
        today: chrono::NaiveDate,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

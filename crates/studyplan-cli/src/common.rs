//! Shared helpers for CLI commands: request loading and date resolution.

use std::path::Path;

use chrono::NaiveDate;
use studyplan_core::{generate_plan, CoreError, PlanRequest, StudyPlan};

/// Load a plan request from a TOML or JSON file, keyed on extension.
///
/// Subjects without an id get a fresh uuid so downstream output always has
/// a stable identity field.
pub fn load_request(path: &Path) -> Result<PlanRequest, CoreError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CoreError::RequestRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut request: PlanRequest = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&contents).map_err(|e| CoreError::RequestParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?,
        Some("json") => serde_json::from_str(&contents).map_err(|e| CoreError::RequestParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?,
        _ => {
            return Err(CoreError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    for subject in &mut request.subjects {
        if subject.id.is_empty() {
            subject.id = uuid::Uuid::new_v4().to_string();
        }
    }

    Ok(request)
}

/// Reference date for plan generation: the `--today` override when given,
/// otherwise the local calendar date.
pub fn resolve_today(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| chrono::Local::now().date_naive())
}

/// Load, validate, and run the engine in one step.
pub fn load_and_generate(
    path: &Path,
    today: Option<NaiveDate>,
) -> Result<StudyPlan, CoreError> {
    let request = load_request(path)?;
    let today = resolve_today(today);
    request.validate(today)?;
    Ok(generate_plan(&request, today))
}

pub mod insights;
pub mod plan;
pub mod schedule;
pub mod subjects;

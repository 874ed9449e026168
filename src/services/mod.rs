pub mod attendance_service;
pub mod calendar;
pub mod export_service;
pub mod report_service;
pub mod schedule_service;

use std::fmt;

/// Errors surfaced by the service layer. Database failures pass through;
/// the one domain error is an elective-group conflict in the schedule.
#[derive(Debug)]
pub enum ServiceError {
    Db(sqlx::Error),
    AmbiguousElectiveGroup {
        faculty_id: i64,
        section_id: i64,
        groups: Vec<String>,
    },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Db(e) => write!(f, "database error: {}", e),
            ServiceError::AmbiguousElectiveGroup {
                faculty_id,
                section_id,
                groups,
            } => write!(
                f,
                "faculty {} is scheduled under multiple elective groups {:?} for section {}",
                faculty_id, groups, section_id
            ),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Db(e)
    }
}

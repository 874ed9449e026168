use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::database::{schedule_repo, student_repo};
use crate::services::{calendar, ServiceError};

/// Which students a faculty's marking applies to within a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterScope {
    /// Faculty teaches the whole section.
    Section,
    /// Faculty teaches a single elective group within the section.
    Group(String),
}

/// Resolves the elective scope of (faculty, section). Zero distinct non-null
/// groups means the whole section; exactly one means that group. Two or more
/// is a schedule data conflict and is rejected instead of silently picking one.
pub async fn resolve_roster_scope(
    pool: &SqlitePool,
    faculty_id: i64,
    section_id: i64,
) -> Result<RosterScope, ServiceError> {
    let mut groups = schedule_repo::distinct_group_ids(pool, faculty_id, section_id).await?;
    match groups.len() {
        0 => Ok(RosterScope::Section),
        1 => Ok(RosterScope::Group(groups.remove(0))),
        _ => Err(ServiceError::AmbiguousElectiveGroup {
            faculty_id,
            section_id,
            groups,
        }),
    }
}

pub struct MarkingPageView {
    pub faculty_id: i64,
    pub section_id: i64,
    pub students: Vec<student_repo::StudentRow>,
    pub class_days: Vec<String>,
    pub week_dates: Vec<calendar::WeekRow>,
}

const SEMESTER_WEEKS: u32 = 20;

/// Everything the marking page needs: the scope-filtered roster, the weekdays
/// this faculty teaches the section, and the semester's week/date grid.
pub async fn load_marking_page(
    pool: &SqlitePool,
    faculty_id: i64,
    section_id: i64,
    semester_start: NaiveDate,
) -> Result<MarkingPageView, ServiceError> {
    let students = match resolve_roster_scope(pool, faculty_id, section_id).await? {
        RosterScope::Section => student_repo::list_section_students(pool, section_id).await?,
        RosterScope::Group(group_id) => {
            student_repo::list_group_students(pool, section_id, &group_id).await?
        }
    };
    let class_days = schedule_repo::class_days(pool, faculty_id, section_id).await?;

    Ok(MarkingPageView {
        faculty_id,
        section_id,
        students,
        class_days,
        week_dates: calendar::generate_week_dates(semester_start, SEMESTER_WEEKS),
    })
}

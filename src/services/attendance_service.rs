use std::collections::HashSet;

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::database::{attendance_repo, student_repo};
use crate::models::AttendanceStatus;
use crate::services::schedule_service::{self, RosterScope};
use crate::services::ServiceError;

/// Fully parsed marking submission. `absent` holds the student ids the form
/// explicitly flagged; the boundary computes it once from the raw fields so
/// the writer never looks at form encoding.
#[derive(Debug)]
pub struct SaveAttendanceInput {
    pub faculty_id: i64,
    pub section_id: i64,
    pub week_id: i64,
    pub date: NaiveDate,
    pub absent: HashSet<i64>,
    pub marked_by: i64,
}

/// Resolves the roster for (faculty, section), maps every member to a status
/// (flagged -> Absent, everyone else -> Present) and upserts the whole day in
/// one transaction. Returns the number of rows written.
pub async fn save_attendance(
    pool: &SqlitePool,
    input: SaveAttendanceInput,
) -> Result<usize, ServiceError> {
    let roster = match schedule_service::resolve_roster_scope(
        pool,
        input.faculty_id,
        input.section_id,
    )
    .await?
    {
        RosterScope::Section => {
            student_repo::list_section_student_ids(pool, input.section_id).await?
        }
        RosterScope::Group(group_id) => {
            student_repo::list_group_student_ids(pool, input.section_id, &group_id).await?
        }
    };

    let marks: Vec<attendance_repo::StudentMark> = roster
        .iter()
        .map(|&student_id| attendance_repo::StudentMark {
            student_id,
            status: if input.absent.contains(&student_id) {
                AttendanceStatus::Absent
            } else {
                AttendanceStatus::Present
            },
        })
        .collect();

    attendance_repo::save_day_attendance(
        pool,
        attendance_repo::MarkingKey {
            faculty_id: input.faculty_id,
            section_id: input.section_id,
            week_id: input.week_id,
            date: input.date,
            marked_by: input.marked_by,
        },
        &marks,
    )
    .await?;

    Ok(marks.len())
}

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::AttendanceStatus;

/// One resolved (student, status) pair for a marking submission. The full
/// roster mapping is computed by the attendance service before it reaches
/// this repo; nothing here defaults or infers statuses.
#[derive(Debug)]
pub struct StudentMark {
    pub student_id: i64,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Copy)]
pub struct MarkingKey {
    pub faculty_id: i64,
    pub section_id: i64,
    pub week_id: i64,
    pub date: NaiveDate,
    pub marked_by: i64,
}

const SQL_UPSERT_ATTENDANCE: &str = r#"
INSERT INTO attendance
  (student_id, faculty_id, section_id, week_id, date, status, marked_by)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
ON CONFLICT (student_id, date, faculty_id, section_id)
DO UPDATE SET
  status = excluded.status,
  marked_by = excluded.marked_by
"#;

/// Upserts one attendance row per roster member inside a single transaction,
/// so a mid-roster failure leaves no half-applied day.
pub async fn save_day_attendance(
    pool: &SqlitePool,
    key: MarkingKey,
    marks: &[StudentMark],
) -> sqlx::Result<()> {
    let mut tx = pool.begin().await?;
    for mark in marks {
        sqlx::query(SQL_UPSERT_ATTENDANCE)
            .bind(mark.student_id)
            .bind(key.faculty_id)
            .bind(key.section_id)
            .bind(key.week_id)
            .bind(key.date)
            .bind(mark.status.as_str())
            .bind(key.marked_by)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await
}

#[derive(Debug, sqlx::FromRow)]
pub struct DayReportRow {
    pub roll_no: String,
    pub name: String,
    pub status: String,
}

const SQL_DAY_REPORT: &str = r#"
SELECT
  s.roll_no,
  s.name,
  a.status
FROM attendance a
JOIN students s ON s.student_id = a.student_id
WHERE a.date = ?1
  AND a.faculty_id = ?2
ORDER BY s.roll_no
"#;

pub async fn day_report_rows(
    pool: &SqlitePool,
    date: NaiveDate,
    faculty_id: i64,
) -> sqlx::Result<Vec<DayReportRow>> {
    sqlx::query_as::<_, DayReportRow>(SQL_DAY_REPORT)
        .bind(date)
        .bind(faculty_id)
        .fetch_all(pool)
        .await
}

#[derive(Debug, sqlx::FromRow)]
pub struct StatusCounts {
    pub present: i64,
    pub absent: i64,
}

const SQL_STATUS_COUNTS: &str = r#"
SELECT
  COUNT(*) FILTER (WHERE status = 'Present') AS present,
  COUNT(*) FILTER (WHERE status = 'Absent') AS absent
FROM attendance
WHERE date = ?1
  AND faculty_id = ?2
"#;

pub async fn day_status_counts(
    pool: &SqlitePool,
    date: NaiveDate,
    faculty_id: i64,
) -> sqlx::Result<StatusCounts> {
    sqlx::query_as::<_, StatusCounts>(SQL_STATUS_COUNTS)
        .bind(date)
        .bind(faculty_id)
        .fetch_one(pool)
        .await
}

#[derive(Debug, sqlx::FromRow)]
pub struct AdminReportRow {
    pub roll_no: String,
    pub status: String,
}

const SQL_ADMIN_REPORT: &str = r#"
SELECT
  s.roll_no,
  a.status
FROM attendance a
JOIN students s ON s.student_id = a.student_id
WHERE a.faculty_id = ?1
  AND a.date = ?2
ORDER BY s.roll_no
"#;

pub async fn admin_report_rows(
    pool: &SqlitePool,
    faculty_id: i64,
    date: NaiveDate,
) -> sqlx::Result<Vec<AdminReportRow>> {
    sqlx::query_as::<_, AdminReportRow>(SQL_ADMIN_REPORT)
        .bind(faculty_id)
        .bind(date)
        .fetch_all(pool)
        .await
}

#[derive(Debug, sqlx::FromRow)]
pub struct DayExportRow {
    pub roll_no: String,
    pub name: String,
    pub status: String,
}

// Cross-faculty: the day export covers every class marked on that date.
const SQL_DAY_EXPORT: &str = r#"
SELECT
  s.roll_no,
  s.name,
  a.status
FROM attendance a
JOIN students s ON s.student_id = a.student_id
WHERE a.date = ?1
ORDER BY s.roll_no
"#;

pub async fn day_export_rows(
    pool: &SqlitePool,
    date: NaiveDate,
) -> sqlx::Result<Vec<DayExportRow>> {
    sqlx::query_as::<_, DayExportRow>(SQL_DAY_EXPORT)
        .bind(date)
        .fetch_all(pool)
        .await
}

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::database::{attendance_repo, audit_repo, schedule_repo, student_day_repo, summary_repo};
use crate::services::calendar;

pub struct DayReport {
    pub rows: Vec<attendance_repo::DayReportRow>,
    pub present_count: i64,
    pub absent_count: i64,
}

/// Single-day report for one faculty: roll/name/status rows ordered by roll
/// number plus the present/absent tallies over exactly the same filter.
pub async fn day_report(
    pool: &SqlitePool,
    date: NaiveDate,
    faculty_id: i64,
) -> sqlx::Result<DayReport> {
    let rows = attendance_repo::day_report_rows(pool, date, faculty_id).await?;
    let counts = attendance_repo::day_status_counts(pool, date, faculty_id).await?;
    Ok(DayReport {
        rows,
        present_count: counts.present,
        absent_count: counts.absent,
    })
}

/// "No class" and "not marked" are report states, not errors: a weekday with
/// no matching schedule entry must never look like an empty-but-valid report.
pub enum AdminDayReport {
    NoClass,
    NotMarked,
    Marked {
        rows: Vec<attendance_repo::AdminReportRow>,
        present_count: i64,
        absent_count: i64,
    },
}

pub async fn admin_day_report(
    pool: &SqlitePool,
    faculty_id: i64,
    subject: &str,
    date: NaiveDate,
) -> sqlx::Result<AdminDayReport> {
    let day = calendar::weekday_name(date);
    if !schedule_repo::class_exists(pool, faculty_id, subject, day).await? {
        return Ok(AdminDayReport::NoClass);
    }

    let rows = attendance_repo::admin_report_rows(pool, faculty_id, date).await?;
    if rows.is_empty() {
        return Ok(AdminDayReport::NotMarked);
    }

    let counts = attendance_repo::day_status_counts(pool, date, faculty_id).await?;
    Ok(AdminDayReport::Marked {
        rows,
        present_count: counts.present,
        absent_count: counts.absent,
    })
}

pub struct AuditRowView {
    pub date: String,
    pub marked_by: String,
    pub marker_role: String,
    pub class_faculty: String,
    pub section_name: String,
}

pub enum AuditReport {
    NoClass,
    Rows(Vec<AuditRowView>),
}

const AUDIT_DEFAULT_LIMIT: i64 = 50;

/// Cross-faculty audit: who marked whose class. With a date, first checks any
/// class is scheduled that weekday at all; without one, the latest 50 entries.
pub async fn audit_report(
    pool: &SqlitePool,
    date: Option<NaiveDate>,
) -> sqlx::Result<AuditReport> {
    let rows = match date {
        Some(date) => {
            if schedule_repo::classes_on_day(pool, calendar::weekday_name(date)).await? == 0 {
                return Ok(AuditReport::NoClass);
            }
            audit_repo::audit_rows_for_date(pool, date).await?
        }
        None => audit_repo::latest_audit_rows(pool, AUDIT_DEFAULT_LIMIT).await?,
    };

    Ok(AuditReport::Rows(
        rows.into_iter()
            .map(|r| AuditRowView {
                date: r.date.format("%Y-%m-%d").to_string(),
                marked_by: r.marked_by,
                marker_role: r.marker_role,
                class_faculty: r.class_faculty,
                section_name: r.section_name,
            })
            .collect(),
    ))
}

/// Per (faculty, subject, section) tallies for one date.
pub async fn daily_summary(
    pool: &SqlitePool,
    date: NaiveDate,
) -> sqlx::Result<Vec<summary_repo::DailySummaryRow>> {
    summary_repo::daily_summary_rows(pool, date, calendar::weekday_name(date)).await
}

/// One student's day, period by period.
pub async fn student_day_report(
    pool: &SqlitePool,
    student_id: i64,
    date: NaiveDate,
) -> sqlx::Result<Vec<student_day_repo::StudentPeriodRow>> {
    student_day_repo::student_day_rows(pool, student_id, date, calendar::weekday_name(date)).await
}

use chrono::NaiveDate;
use sqlx::SqlitePool;

#[derive(Debug, sqlx::FromRow)]
pub struct StudentPeriodRow {
    pub period_no: i64,
    pub subject: String,
    pub faculty_name: String,
    pub status: String,
}

// Joins a student's attendance back to the schedule entry for that weekday
// so each row carries the period and subject it belongs to.
const SQL_STUDENT_DAY: &str = r#"
SELECT
  cs.period_no,
  cs.subject,
  f.name AS faculty_name,
  a.status
FROM attendance a
JOIN class_schedule cs
  ON cs.section_id = a.section_id
 AND cs.faculty_id = a.faculty_id
 AND cs.day_of_week = ?3
JOIN faculty f ON f.faculty_id = cs.faculty_id
WHERE a.student_id = ?1
  AND a.date = ?2
ORDER BY cs.period_no
"#;

pub async fn student_day_rows(
    pool: &SqlitePool,
    student_id: i64,
    date: NaiveDate,
    day_of_week: &str,
) -> sqlx::Result<Vec<StudentPeriodRow>> {
    sqlx::query_as::<_, StudentPeriodRow>(SQL_STUDENT_DAY)
        .bind(student_id)
        .bind(date)
        .bind(day_of_week)
        .fetch_all(pool)
        .await
}

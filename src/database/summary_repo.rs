use chrono::NaiveDate;
use sqlx::SqlitePool;

#[derive(Debug, sqlx::FromRow)]
pub struct DailySummaryRow {
    pub faculty_name: String,
    pub subject: String,
    pub section_name: String,
    pub present_count: i64,
    pub absent_count: i64,
}

// The schedule join needs the weekday name of the report date; the caller
// computes it once and binds it (?2) instead of deriving it in SQL.
const SQL_DAILY_SUMMARY: &str = r#"
SELECT
  f.name AS faculty_name,
  cs.subject,
  s.section_name,
  COUNT(*) FILTER (WHERE a.status = 'Present') AS present_count,
  COUNT(*) FILTER (WHERE a.status = 'Absent') AS absent_count
FROM attendance a
JOIN faculty f  ON f.faculty_id = a.faculty_id
JOIN sections s ON s.section_id = a.section_id
JOIN class_schedule cs
  ON cs.faculty_id = a.faculty_id
 AND cs.section_id = a.section_id
 AND cs.day_of_week = ?2
WHERE a.date = ?1
GROUP BY f.name, cs.subject, s.section_name
ORDER BY s.section_name, f.name
"#;

pub async fn daily_summary_rows(
    pool: &SqlitePool,
    date: NaiveDate,
    day_of_week: &str,
) -> sqlx::Result<Vec<DailySummaryRow>> {
    sqlx::query_as::<_, DailySummaryRow>(SQL_DAILY_SUMMARY)
        .bind(date)
        .bind(day_of_week)
        .fetch_all(pool)
        .await
}

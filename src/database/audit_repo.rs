use chrono::NaiveDate;
use sqlx::SqlitePool;

#[derive(Debug, sqlx::FromRow)]
pub struct AuditRow {
    pub date: NaiveDate,
    pub marked_by: String,
    pub marker_role: String,
    pub class_faculty: String,
    pub section_name: String,
}

// GROUP BY collapses the per-student rows into one line per marking event.
const SQL_AUDIT_FOR_DATE: &str = r#"
SELECT
  a.date,
  f_marker.name AS marked_by,
  f_marker.role AS marker_role,
  f_class.name  AS class_faculty,
  s.section_name
FROM attendance a
JOIN faculty f_marker ON f_marker.faculty_id = a.marked_by
JOIN faculty f_class  ON f_class.faculty_id = a.faculty_id
JOIN sections s       ON s.section_id = a.section_id
WHERE a.date = ?1
GROUP BY a.date, f_marker.name, f_marker.role, f_class.name, s.section_name
ORDER BY f_class.name
"#;

pub async fn audit_rows_for_date(
    pool: &SqlitePool,
    date: NaiveDate,
) -> sqlx::Result<Vec<AuditRow>> {
    sqlx::query_as::<_, AuditRow>(SQL_AUDIT_FOR_DATE)
        .bind(date)
        .fetch_all(pool)
        .await
}

const SQL_LATEST_AUDIT: &str = r#"
SELECT
  a.date,
  f_marker.name AS marked_by,
  f_marker.role AS marker_role,
  f_class.name  AS class_faculty,
  s.section_name
FROM attendance a
JOIN faculty f_marker ON f_marker.faculty_id = a.marked_by
JOIN faculty f_class  ON f_class.faculty_id = a.faculty_id
JOIN sections s       ON s.section_id = a.section_id
GROUP BY a.date, f_marker.name, f_marker.role, f_class.name, s.section_name
ORDER BY a.date DESC
LIMIT ?1
"#;

pub async fn latest_audit_rows(pool: &SqlitePool, limit: i64) -> sqlx::Result<Vec<AuditRow>> {
    sqlx::query_as::<_, AuditRow>(SQL_LATEST_AUDIT)
        .bind(limit)
        .fetch_all(pool)
        .await
}

#[derive(Debug, sqlx::FromRow)]
pub struct AuditExportRow {
    pub marked_by: String,
    pub class_faculty: String,
    pub section_name: String,
    pub date: NaiveDate,
}

const SQL_AUDIT_EXPORT: &str = r#"
SELECT
  f_marker.name AS marked_by,
  f_class.name  AS class_faculty,
  s.section_name,
  a.date
FROM attendance a
JOIN faculty f_marker ON f_marker.faculty_id = a.marked_by
JOIN faculty f_class  ON f_class.faculty_id = a.faculty_id
JOIN sections s       ON s.section_id = a.section_id
GROUP BY f_marker.name, f_class.name, s.section_name, a.date
ORDER BY a.date DESC
"#;

pub async fn audit_export_rows(pool: &SqlitePool) -> sqlx::Result<Vec<AuditExportRow>> {
    sqlx::query_as::<_, AuditExportRow>(SQL_AUDIT_EXPORT)
        .fetch_all(pool)
        .await
}

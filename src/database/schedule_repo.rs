use sqlx::SqlitePool;

// All distinct elective groups a faculty is scheduled under for a section.
// The resolver treats more than one as a data conflict rather than picking.
const SQL_DISTINCT_GROUP_IDS: &str = r#"
SELECT DISTINCT group_id
FROM class_schedule
WHERE faculty_id = ?1
  AND section_id = ?2
  AND group_id IS NOT NULL
ORDER BY group_id
"#;

pub async fn distinct_group_ids(
    pool: &SqlitePool,
    faculty_id: i64,
    section_id: i64,
) -> sqlx::Result<Vec<String>> {
    sqlx::query_scalar::<_, String>(SQL_DISTINCT_GROUP_IDS)
        .bind(faculty_id)
        .bind(section_id)
        .fetch_all(pool)
        .await
}

const SQL_TEACHES_SECTION: &str = r#"
SELECT 1
FROM class_schedule
WHERE faculty_id = ?1
  AND section_id = ?2
LIMIT 1
"#;

pub async fn teaches_section(
    pool: &SqlitePool,
    faculty_id: i64,
    section_id: i64,
) -> sqlx::Result<bool> {
    let row = sqlx::query_scalar::<_, i64>(SQL_TEACHES_SECTION)
        .bind(faculty_id)
        .bind(section_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

const SQL_CLASS_DAYS: &str = r#"
SELECT DISTINCT day_of_week
FROM class_schedule
WHERE faculty_id = ?1
  AND section_id = ?2
"#;

pub async fn class_days(
    pool: &SqlitePool,
    faculty_id: i64,
    section_id: i64,
) -> sqlx::Result<Vec<String>> {
    sqlx::query_scalar::<_, String>(SQL_CLASS_DAYS)
        .bind(faculty_id)
        .bind(section_id)
        .fetch_all(pool)
        .await
}

const SQL_SUBJECTS_FOR_FACULTY: &str = r#"
SELECT DISTINCT subject
FROM class_schedule
WHERE faculty_id = ?1
ORDER BY subject
"#;

pub async fn subjects_for_faculty(
    pool: &SqlitePool,
    faculty_id: i64,
) -> sqlx::Result<Vec<String>> {
    sqlx::query_scalar::<_, String>(SQL_SUBJECTS_FOR_FACULTY)
        .bind(faculty_id)
        .fetch_all(pool)
        .await
}

const SQL_ALL_SUBJECTS: &str = r#"
SELECT DISTINCT subject
FROM class_schedule
ORDER BY subject
"#;

pub async fn all_subjects(pool: &SqlitePool) -> sqlx::Result<Vec<String>> {
    sqlx::query_scalar::<_, String>(SQL_ALL_SUBJECTS)
        .fetch_all(pool)
        .await
}

const SQL_CLASSES_ON_DAY: &str = r#"
SELECT COUNT(*)
FROM class_schedule
WHERE day_of_week = ?1
"#;

pub async fn classes_on_day(pool: &SqlitePool, day_of_week: &str) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(SQL_CLASSES_ON_DAY)
        .bind(day_of_week)
        .fetch_one(pool)
        .await
}

const SQL_CLASS_EXISTS: &str = r#"
SELECT 1
FROM class_schedule
WHERE faculty_id = ?1
  AND subject = ?2
  AND day_of_week = ?3
LIMIT 1
"#;

pub async fn class_exists(
    pool: &SqlitePool,
    faculty_id: i64,
    subject: &str,
    day_of_week: &str,
) -> sqlx::Result<bool> {
    let row = sqlx::query_scalar::<_, i64>(SQL_CLASS_EXISTS)
        .bind(faculty_id)
        .bind(subject)
        .bind(day_of_week)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

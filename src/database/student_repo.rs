use sqlx::SqlitePool;

#[derive(Debug, sqlx::FromRow)]
pub struct StudentRow {
    pub student_id: i64,
    pub roll_no: String,
    pub name: String,
}

const SQL_LIST_SECTION_STUDENTS: &str = r#"
SELECT
  student_id,
  roll_no,
  name
FROM students
WHERE section_id = ?1
ORDER BY roll_no
"#;

pub async fn list_section_students(
    pool: &SqlitePool,
    section_id: i64,
) -> sqlx::Result<Vec<StudentRow>> {
    sqlx::query_as::<_, StudentRow>(SQL_LIST_SECTION_STUDENTS)
        .bind(section_id)
        .fetch_all(pool)
        .await
}

const SQL_LIST_GROUP_STUDENTS: &str = r#"
SELECT
  student_id,
  roll_no,
  name
FROM students
WHERE section_id = ?1
  AND group_id = ?2
ORDER BY roll_no
"#;

pub async fn list_group_students(
    pool: &SqlitePool,
    section_id: i64,
    group_id: &str,
) -> sqlx::Result<Vec<StudentRow>> {
    sqlx::query_as::<_, StudentRow>(SQL_LIST_GROUP_STUDENTS)
        .bind(section_id)
        .bind(group_id)
        .fetch_all(pool)
        .await
}

const SQL_LIST_SECTION_STUDENT_IDS: &str = r#"
SELECT student_id
FROM students
WHERE section_id = ?1
ORDER BY roll_no
"#;

pub async fn list_section_student_ids(
    pool: &SqlitePool,
    section_id: i64,
) -> sqlx::Result<Vec<i64>> {
    sqlx::query_scalar::<_, i64>(SQL_LIST_SECTION_STUDENT_IDS)
        .bind(section_id)
        .fetch_all(pool)
        .await
}

const SQL_LIST_GROUP_STUDENT_IDS: &str = r#"
SELECT student_id
FROM students
WHERE section_id = ?1
  AND group_id = ?2
ORDER BY roll_no
"#;

pub async fn list_group_student_ids(
    pool: &SqlitePool,
    section_id: i64,
    group_id: &str,
) -> sqlx::Result<Vec<i64>> {
    sqlx::query_scalar::<_, i64>(SQL_LIST_GROUP_STUDENT_IDS)
        .bind(section_id)
        .bind(group_id)
        .fetch_all(pool)
        .await
}

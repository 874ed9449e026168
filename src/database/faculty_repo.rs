use sqlx::SqlitePool;

#[derive(Debug, sqlx::FromRow)]
pub struct FacultyListRow {
    pub faculty_id: i64,
    pub name: String,
    pub role: String,
}

const SQL_LIST_FACULTY: &str = r#"
SELECT
  faculty_id,
  name,
  role
FROM faculty
ORDER BY name
"#;

pub async fn list_faculty(pool: &SqlitePool) -> sqlx::Result<Vec<FacultyListRow>> {
    sqlx::query_as::<_, FacultyListRow>(SQL_LIST_FACULTY)
        .fetch_all(pool)
        .await
}

#[derive(Debug, sqlx::FromRow)]
pub struct FacultyOptionRow {
    pub faculty_id: i64,
    pub name: String,
}

const SQL_LIST_TEACHING_FACULTY: &str = r#"
SELECT
  faculty_id,
  name
FROM faculty
WHERE role = 'faculty'
ORDER BY name
"#;

pub async fn list_teaching_faculty(pool: &SqlitePool) -> sqlx::Result<Vec<FacultyOptionRow>> {
    sqlx::query_as::<_, FacultyOptionRow>(SQL_LIST_TEACHING_FACULTY)
        .fetch_all(pool)
        .await
}

#[derive(Debug, sqlx::FromRow)]
pub struct FacultyAuthRow {
    pub faculty_id: i64,
    pub role: String,
}

// Plaintext exact-match credentials, as provisioned in the faculty table.
const SQL_AUTHENTICATE: &str = r#"
SELECT
  faculty_id,
  role
FROM faculty
WHERE faculty_id = ?1
  AND password = ?2
"#;

pub async fn authenticate(
    pool: &SqlitePool,
    faculty_id: i64,
    password: &str,
) -> sqlx::Result<Option<FacultyAuthRow>> {
    sqlx::query_as::<_, FacultyAuthRow>(SQL_AUTHENTICATE)
        .bind(faculty_id)
        .bind(password)
        .fetch_optional(pool)
        .await
}

const SQL_LOAD_FACULTY_NAME: &str = r#"
SELECT name
FROM faculty
WHERE faculty_id = ?1
"#;

pub async fn load_faculty_name(
    pool: &SqlitePool,
    faculty_id: i64,
) -> sqlx::Result<Option<String>> {
    sqlx::query_scalar::<_, String>(SQL_LOAD_FACULTY_NAME)
        .bind(faculty_id)
        .fetch_optional(pool)
        .await
}

use sqlx::SqlitePool;

#[derive(Debug, sqlx::FromRow)]
pub struct SectionRow {
    pub section_id: i64,
    pub section_name: String,
}

const SQL_LIST_SECTIONS: &str = r#"
SELECT
  section_id,
  section_name
FROM sections
ORDER BY section_name
"#;

pub async fn list_sections(pool: &SqlitePool) -> sqlx::Result<Vec<SectionRow>> {
    sqlx::query_as::<_, SectionRow>(SQL_LIST_SECTIONS)
        .fetch_all(pool)
        .await
}

const SQL_LOAD_SECTION_NAME: &str = r#"
SELECT section_name
FROM sections
WHERE section_id = ?1
"#;

pub async fn load_section_name(
    pool: &SqlitePool,
    section_id: i64,
) -> sqlx::Result<Option<String>> {
    sqlx::query_scalar::<_, String>(SQL_LOAD_SECTION_NAME)
        .bind(section_id)
        .fetch_optional(pool)
        .await
}

use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::database::{faculty_repo, section_repo};
use crate::web::routes::db_error_response;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub faculty: Vec<faculty_repo::FacultyListRow>,
    pub sections: Vec<section_repo::SectionRow>,
}

/// Landing page: faculty and section pickers for the login form.
pub async fn index(State(pool): State<SqlitePool>) -> Response {
    let faculty = match faculty_repo::list_faculty(&pool).await {
        Ok(rows) => rows,
        Err(e) => return db_error_response(e),
    };
    let sections = match section_repo::list_sections(&pool).await {
        Ok(rows) => rows,
        Err(e) => return db_error_response(e),
    };

    let template = IndexTemplate { faculty, sections };
    Html(template.render().unwrap()).into_response()
}

#[derive(Deserialize)]
pub struct SelectForm {
    pub faculty_id: i64,
    pub section_id: i64,
}

pub async fn select(Form(form): Form<SelectForm>) -> Redirect {
    Redirect::to(&format!(
        "/attendance/{}/{}",
        form.faculty_id, form.section_id
    ))
}

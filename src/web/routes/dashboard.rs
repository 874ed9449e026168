use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Extension,
};
use sqlx::SqlitePool;
use tracing::warn;

use crate::database::{faculty_repo, section_repo};
use crate::models::{Operation, Role};
use crate::web::routes::db_error_response;
use crate::web::session::AuthContext;

#[derive(Template)]
#[template(path = "admin_dashboard.html")]
pub struct AdminDashboardTemplate {
    pub admin_name: String,
    pub faculty_id: i64,
    pub section_id: i64,
    pub section_name: String,
}

pub async fn admin_dashboard(
    Extension(auth): Extension<AuthContext>,
    State(pool): State<SqlitePool>,
) -> Response {
    if !auth.role.allows(Operation::ViewAdminReports) {
        return (StatusCode::FORBIDDEN, "Access Denied").into_response();
    }

    let (admin_name, section_name) = match load_names(&pool, &auth).await {
        Ok(Some(names)) => names,
        Ok(None) => return (StatusCode::NOT_FOUND, "Unknown faculty or section").into_response(),
        Err(e) => return db_error_response(e),
    };

    let template = AdminDashboardTemplate {
        admin_name,
        faculty_id: auth.faculty_id,
        section_id: auth.section_id,
        section_name,
    };
    Html(template.render().unwrap()).into_response()
}

#[derive(Template)]
#[template(path = "faculty_dashboard.html")]
pub struct FacultyDashboardTemplate {
    pub faculty_name: String,
    pub faculty_id: i64,
    pub section_id: i64,
    pub section_name: String,
}

pub async fn faculty_dashboard(
    Extension(auth): Extension<AuthContext>,
    State(pool): State<SqlitePool>,
) -> Response {
    if auth.role != Role::Faculty {
        return (StatusCode::FORBIDDEN, "Access Denied").into_response();
    }

    let (faculty_name, section_name) = match load_names(&pool, &auth).await {
        Ok(Some(names)) => names,
        Ok(None) => return (StatusCode::NOT_FOUND, "Unknown faculty or section").into_response(),
        Err(e) => return db_error_response(e),
    };

    let template = FacultyDashboardTemplate {
        faculty_name,
        faculty_id: auth.faculty_id,
        section_id: auth.section_id,
        section_name,
    };
    Html(template.render().unwrap()).into_response()
}

async fn load_names(
    pool: &SqlitePool,
    auth: &AuthContext,
) -> sqlx::Result<Option<(String, String)>> {
    let Some(name) = faculty_repo::load_faculty_name(pool, auth.faculty_id).await? else {
        warn!("session faculty {} not found", auth.faculty_id);
        return Ok(None);
    };
    let Some(section_name) = section_repo::load_section_name(pool, auth.section_id).await? else {
        warn!("session section {} not found", auth.section_id);
        return Ok(None);
    };
    Ok(Some((name, section_name)))
}

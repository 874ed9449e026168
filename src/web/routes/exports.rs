use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension,
};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::error;

use crate::database::{attendance_repo, audit_repo};
use crate::models::Operation;
use crate::services::calendar;
use crate::services::export_service;
use crate::services::report_service;
use crate::web::routes::db_error_response;
use crate::web::session::AuthContext;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

fn xlsx_response(filename: &str, bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, XLSX_MIME.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        bytes,
    )
        .into_response()
}

fn xlsx_error_response(e: rust_xlsxwriter::XlsxError) -> Response {
    error!("workbook build failed: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
}

#[derive(Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

/// Everything marked on one date, across all faculties.
pub async fn download_excel(
    Query(query): Query<DateQuery>,
    State(pool): State<SqlitePool>,
) -> Response {
    let Some(raw_date) = query.date else {
        return (StatusCode::BAD_REQUEST, "Missing parameters").into_response();
    };
    let Some(date) = calendar::parse_iso_date(&raw_date) else {
        return (StatusCode::BAD_REQUEST, "Invalid date").into_response();
    };

    let rows = match attendance_repo::day_export_rows(&pool, date).await {
        Ok(rows) => rows,
        Err(e) => return db_error_response(e),
    };

    match export_service::day_attendance_sheet(&rows) {
        Ok(bytes) => xlsx_response(&format!("Attendance_{}.xlsx", raw_date), bytes),
        Err(e) => xlsx_error_response(e),
    }
}

/// Full audit trail of who marked whose class, hod/ahod only.
pub async fn download_faculty_report(
    Extension(auth): Extension<AuthContext>,
    State(pool): State<SqlitePool>,
) -> Response {
    if !auth.role.allows(Operation::ViewAdminReports) {
        return (StatusCode::FORBIDDEN, "Access Denied").into_response();
    }

    let rows = match audit_repo::audit_export_rows(&pool).await {
        Ok(rows) => rows,
        Err(e) => return db_error_response(e),
    };

    match export_service::audit_sheet(&rows) {
        Ok(bytes) => xlsx_response("Faculty_Attendance_Audit.xlsx", bytes),
        Err(e) => xlsx_error_response(e),
    }
}

#[derive(Deserialize)]
pub struct StudentExportQuery {
    pub student_id: Option<i64>,
    pub date: Option<String>,
}

pub async fn download_student_excel(
    Query(query): Query<StudentExportQuery>,
    State(pool): State<SqlitePool>,
) -> Response {
    let (Some(student_id), Some(raw_date)) = (query.student_id, query.date) else {
        return (StatusCode::BAD_REQUEST, "Missing parameters").into_response();
    };
    let Some(date) = calendar::parse_iso_date(&raw_date) else {
        return (StatusCode::BAD_REQUEST, "Invalid date").into_response();
    };

    let rows = match report_service::student_day_report(&pool, student_id, date).await {
        Ok(rows) => rows,
        Err(e) => return db_error_response(e),
    };

    match export_service::student_day_sheet(date, &rows) {
        Ok(bytes) => xlsx_response(&format!("Student_Attendance_{}.xlsx", raw_date), bytes),
        Err(e) => xlsx_error_response(e),
    }
}

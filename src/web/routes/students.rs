use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::database::{schedule_repo, section_repo, student_repo};
use crate::services::calendar;
use crate::services::report_service;
use crate::web::routes::db_error_response;

#[derive(Template)]
#[template(path = "student_report.html")]
pub struct StudentReportTemplate {
    pub sections: Vec<section_repo::SectionRow>,
}

/// Student-centric lookup page: section picker; the student, subject and
/// per-day data come from the JSON endpoints below.
pub async fn student_report(State(pool): State<SqlitePool>) -> Response {
    let sections = match section_repo::list_sections(&pool).await {
        Ok(rows) => rows,
        Err(e) => return db_error_response(e),
    };
    let template = StudentReportTemplate { sections };
    Html(template.render().unwrap()).into_response()
}

#[derive(Serialize)]
pub struct StudentJson {
    pub id: i64,
    pub roll: String,
    pub name: String,
}

#[derive(Serialize)]
pub struct StudentsResponse {
    pub students: Vec<StudentJson>,
}

pub async fn get_students(
    Path(section_id): Path<i64>,
    State(pool): State<SqlitePool>,
) -> Response {
    let students = match student_repo::list_section_students(&pool, section_id).await {
        Ok(rows) => rows,
        Err(e) => return db_error_response(e),
    };
    Json(StudentsResponse {
        students: students
            .into_iter()
            .map(|s| StudentJson {
                id: s.student_id,
                roll: s.roll_no,
                name: s.name,
            })
            .collect(),
    })
    .into_response()
}

#[derive(Serialize)]
pub struct SubjectsResponse {
    pub subjects: Vec<String>,
}

pub async fn get_subjects(State(pool): State<SqlitePool>) -> Response {
    match schedule_repo::all_subjects(&pool).await {
        Ok(subjects) => Json(SubjectsResponse { subjects }).into_response(),
        Err(e) => db_error_response(e),
    }
}

#[derive(Deserialize)]
pub struct StudentAttendanceQuery {
    pub date: Option<String>,
}

#[derive(Serialize)]
pub struct StudentPeriodJson {
    pub period: i64,
    pub subject: String,
    pub faculty: String,
    pub status: String,
}

#[derive(Serialize)]
pub struct StudentAttendanceResponse {
    pub attendance: Vec<StudentPeriodJson>,
}

/// Per-period breakdown of one student's day. No date yields an empty list
/// rather than an error, so the page can poll before a date is picked.
pub async fn get_student_attendance(
    Path(student_id): Path<i64>,
    Query(query): Query<StudentAttendanceQuery>,
    State(pool): State<SqlitePool>,
) -> Response {
    let Some(raw_date) = query.date else {
        return Json(StudentAttendanceResponse { attendance: vec![] }).into_response();
    };
    let Some(date) = calendar::parse_iso_date(&raw_date) else {
        return (StatusCode::BAD_REQUEST, "Invalid date").into_response();
    };

    match report_service::student_day_report(&pool, student_id, date).await {
        Ok(rows) => Json(StudentAttendanceResponse {
            attendance: rows
                .into_iter()
                .map(|r| StudentPeriodJson {
                    period: r.period_no,
                    subject: r.subject,
                    faculty: r.faculty_name,
                    status: r.status,
                })
                .collect(),
        })
        .into_response(),
        Err(e) => db_error_response(e),
    }
}

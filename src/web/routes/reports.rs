use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Extension,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::database::{attendance_repo, faculty_repo, schedule_repo, summary_repo};
use crate::models::{Operation, Role};
use crate::services::report_service::{self, AdminDayReport, AuditReport};
use crate::services::calendar;
use crate::web::routes::db_error_response;
use crate::web::session::AuthContext;

#[derive(Deserialize)]
pub struct WeekReportQuery {
    pub date: Option<String>,
    pub faculty_id: Option<i64>,
}

#[derive(Template)]
#[template(path = "week_report.html")]
pub struct WeekReportTemplate {
    pub has_report: bool,
    pub selected_date: String,
    pub rows: Vec<attendance_repo::DayReportRow>,
    pub present_count: i64,
    pub absent_count: i64,
}

/// Single-day report. Faculty always see their own records; hod/ahod may
/// filter another faculty via `faculty_id`.
pub async fn week_report(
    Extension(auth): Extension<AuthContext>,
    Query(query): Query<WeekReportQuery>,
    State(pool): State<SqlitePool>,
) -> Response {
    let Some(raw_date) = query.date else {
        let template = WeekReportTemplate {
            has_report: false,
            selected_date: String::new(),
            rows: vec![],
            present_count: 0,
            absent_count: 0,
        };
        return Html(template.render().unwrap()).into_response();
    };

    let Some(date) = calendar::parse_iso_date(&raw_date) else {
        return (StatusCode::BAD_REQUEST, "Invalid date").into_response();
    };

    let faculty_filter = match auth.role {
        Role::Faculty => auth.faculty_id,
        Role::Hod | Role::Ahod => match query.faculty_id {
            Some(requested) if requested != auth.faculty_id => requested,
            _ => auth.faculty_id,
        },
    };

    let report = match report_service::day_report(&pool, date, faculty_filter).await {
        Ok(report) => report,
        Err(e) => return db_error_response(e),
    };

    let template = WeekReportTemplate {
        has_report: true,
        selected_date: raw_date,
        rows: report.rows,
        present_count: report.present_count,
        absent_count: report.absent_count,
    };
    Html(template.render().unwrap()).into_response()
}

#[derive(Deserialize)]
pub struct AdminAttendanceQuery {
    pub faculty_id: Option<i64>,
    pub subject: Option<String>,
    pub date: Option<String>,
}

#[derive(Template)]
#[template(path = "admin_readonly.html")]
pub struct AdminReadonlyTemplate {
    pub faculty_list: Vec<faculty_repo::FacultyOptionRow>,
    pub subjects: Vec<String>,
    pub selected_faculty: String,
    pub selected_subject: String,
    pub selected_date: String,
    pub no_class: bool,
    pub not_marked: bool,
    pub rows: Vec<attendance_repo::AdminReportRow>,
    pub present_count: i64,
    pub absent_count: i64,
}

/// Admin drill-down: once faculty, subject and date are all chosen, the
/// report distinguishes "no class that weekday" from "not marked yet" from
/// an actual row set.
pub async fn admin_attendance(
    Extension(auth): Extension<AuthContext>,
    Query(query): Query<AdminAttendanceQuery>,
    State(pool): State<SqlitePool>,
) -> Response {
    if !auth.role.allows(Operation::ViewAdminReports) {
        return (StatusCode::FORBIDDEN, "Access Denied").into_response();
    }

    let faculty_list = match faculty_repo::list_teaching_faculty(&pool).await {
        Ok(rows) => rows,
        Err(e) => return db_error_response(e),
    };

    let subjects = match query.faculty_id {
        Some(faculty_id) => match schedule_repo::subjects_for_faculty(&pool, faculty_id).await {
            Ok(subjects) => subjects,
            Err(e) => return db_error_response(e),
        },
        None => vec![],
    };

    let mut template = AdminReadonlyTemplate {
        faculty_list,
        subjects,
        selected_faculty: query
            .faculty_id
            .map(|id| id.to_string())
            .unwrap_or_default(),
        selected_subject: query.subject.clone().unwrap_or_default(),
        selected_date: query.date.clone().unwrap_or_default(),
        no_class: false,
        not_marked: false,
        rows: vec![],
        present_count: 0,
        absent_count: 0,
    };

    if let (Some(faculty_id), Some(subject), Some(raw_date)) =
        (query.faculty_id, query.subject.as_deref(), query.date.as_deref())
    {
        let Some(date) = calendar::parse_iso_date(raw_date) else {
            return (StatusCode::BAD_REQUEST, "Invalid date").into_response();
        };
        match report_service::admin_day_report(&pool, faculty_id, subject, date).await {
            Ok(AdminDayReport::NoClass) => template.no_class = true,
            Ok(AdminDayReport::NotMarked) => template.not_marked = true,
            Ok(AdminDayReport::Marked {
                rows,
                present_count,
                absent_count,
            }) => {
                template.rows = rows;
                template.present_count = present_count;
                template.absent_count = absent_count;
            }
            Err(e) => return db_error_response(e),
        }
    }

    Html(template.render().unwrap()).into_response()
}

#[derive(Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

#[derive(Template)]
#[template(path = "faculty_audit.html")]
pub struct FacultyAuditTemplate {
    pub selected_date: String,
    pub no_class: bool,
    pub rows: Vec<report_service::AuditRowView>,
}

pub async fn faculty_audit(
    Extension(auth): Extension<AuthContext>,
    Query(query): Query<DateQuery>,
    State(pool): State<SqlitePool>,
) -> Response {
    if !auth.role.allows(Operation::ViewAdminReports) {
        return (StatusCode::FORBIDDEN, "Access Denied").into_response();
    }

    let date = match query.date.as_deref() {
        Some(raw) => match calendar::parse_iso_date(raw) {
            Some(date) => Some(date),
            None => return (StatusCode::BAD_REQUEST, "Invalid date").into_response(),
        },
        None => None,
    };

    let (no_class, rows) = match report_service::audit_report(&pool, date).await {
        Ok(AuditReport::NoClass) => (true, vec![]),
        Ok(AuditReport::Rows(rows)) => (false, rows),
        Err(e) => return db_error_response(e),
    };

    let template = FacultyAuditTemplate {
        selected_date: query.date.unwrap_or_default(),
        no_class,
        rows,
    };
    Html(template.render().unwrap()).into_response()
}

#[derive(Template)]
#[template(path = "daily_summary.html")]
pub struct DailySummaryTemplate {
    pub selected_date: String,
    pub summary: Vec<summary_repo::DailySummaryRow>,
}

pub async fn daily_summary(
    Extension(auth): Extension<AuthContext>,
    Query(query): Query<DateQuery>,
    State(pool): State<SqlitePool>,
) -> Response {
    if !auth.role.allows(Operation::ViewAdminReports) {
        return (StatusCode::FORBIDDEN, "Access Denied").into_response();
    }

    let summary = match query.date.as_deref() {
        Some(raw) => {
            let Some(date) = calendar::parse_iso_date(raw) else {
                return (StatusCode::BAD_REQUEST, "Invalid date").into_response();
            };
            match report_service::daily_summary(&pool, date).await {
                Ok(rows) => rows,
                Err(e) => return db_error_response(e),
            }
        }
        None => vec![],
    };

    let template = DailySummaryTemplate {
        selected_date: query.date.unwrap_or_default(),
        summary,
    };
    Html(template.render().unwrap()).into_response()
}

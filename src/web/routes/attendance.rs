use std::collections::HashSet;

use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};
use chrono::NaiveDate;

use crate::models::{Operation, Role};
use crate::services::attendance_service::{self, SaveAttendanceInput};
use crate::services::{calendar, schedule_service};
use crate::web::routes::service_error_response;
use crate::web::session::AuthContext;
use crate::web::AppState;

#[derive(Template)]
#[template(path = "attendance.html")]
pub struct MarkingTemplate {
    pub page: schedule_service::MarkingPageView,
}

/// Roster plus the weekly date grid for marking. A plain faculty may only
/// open their own marking page; admins may open any (read-only use).
pub async fn marking_page(
    Extension(auth): Extension<AuthContext>,
    Path((faculty_id, section_id)): Path<(i64, i64)>,
    State(state): State<AppState>,
) -> Response {
    if auth.role == Role::Faculty && faculty_id != auth.faculty_id {
        return (StatusCode::FORBIDDEN, "Access Denied").into_response();
    }

    let page = match schedule_service::load_marking_page(
        &state.pool,
        faculty_id,
        section_id,
        state.semester_start,
    )
    .await
    {
        Ok(page) => page,
        Err(e) => return service_error_response(e),
    };

    let template = MarkingTemplate { page };
    Html(template.render().unwrap()).into_response()
}

/// The raw form decoded once at the boundary: fixed fields plus one
/// `att_<student_id>` flag per student the form marked absent.
struct SaveForm {
    faculty_id: i64,
    section_id: i64,
    week_id: i64,
    date: NaiveDate,
    absent: HashSet<i64>,
}

fn parse_save_form(fields: &[(String, String)]) -> Result<SaveForm, &'static str> {
    let mut faculty_id = None;
    let mut section_id = None;
    let mut week_id = None;
    let mut date = None;
    let mut absent = HashSet::new();

    for (key, value) in fields {
        match key.as_str() {
            "faculty_id" => faculty_id = value.parse::<i64>().ok(),
            "section_id" => section_id = value.parse::<i64>().ok(),
            "week_id" => week_id = value.parse::<i64>().ok(),
            "attendance_date" => date = calendar::parse_day_month_year(value),
            _ => {
                if let Some(id) = key.strip_prefix("att_") {
                    if let Ok(id) = id.parse::<i64>() {
                        absent.insert(id);
                    }
                }
            }
        }
    }

    Ok(SaveForm {
        faculty_id: faculty_id.ok_or("Missing or invalid faculty_id")?,
        section_id: section_id.ok_or("Missing or invalid section_id")?,
        week_id: week_id.ok_or("Missing or invalid week_id")?,
        date: date.ok_or("Missing or invalid attendance_date")?,
        absent,
    })
}

/// Persists one day of attendance for the submitting faculty's roster and
/// redirects to that day's report.
pub async fn save(
    Extension(auth): Extension<AuthContext>,
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    if !auth.role.allows(Operation::MarkAttendance) {
        return (StatusCode::FORBIDDEN, "Admins cannot mark attendance").into_response();
    }

    let form = match parse_save_form(&fields) {
        Ok(form) => form,
        Err(msg) => return (StatusCode::BAD_REQUEST, msg).into_response(),
    };

    let input = SaveAttendanceInput {
        faculty_id: form.faculty_id,
        section_id: form.section_id,
        week_id: form.week_id,
        date: form.date,
        absent: form.absent,
        marked_by: auth.faculty_id,
    };

    if let Err(e) = attendance_service::save_attendance(&state.pool, input).await {
        return service_error_response(e);
    }

    Redirect::to(&format!("/week-report?date={}", form.date.format("%Y-%m-%d"))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parses_absent_flags_and_date() {
        let form = parse_save_form(&fields(&[
            ("faculty_id", "6"),
            ("section_id", "2"),
            ("week_id", "3"),
            ("attendance_date", "02/02/2026"),
            ("att_201", "on"),
            ("att_205", "on"),
        ]))
        .unwrap();
        assert_eq!(form.faculty_id, 6);
        assert_eq!(form.week_id, 3);
        assert_eq!(form.date, NaiveDate::from_ymd_opt(2026, 2, 2).unwrap());
        assert_eq!(form.absent, HashSet::from([201, 205]));
    }

    #[test]
    fn rejects_missing_or_malformed_fields() {
        assert!(parse_save_form(&fields(&[
            ("faculty_id", "6"),
            ("section_id", "2"),
            ("week_id", "3"),
        ]))
        .is_err());
        // ISO dates are not accepted on the marking form
        assert!(parse_save_form(&fields(&[
            ("faculty_id", "6"),
            ("section_id", "2"),
            ("week_id", "3"),
            ("attendance_date", "2026-02-02"),
        ]))
        .is_err());
    }

    #[test]
    fn ignores_unparseable_att_keys() {
        let form = parse_save_form(&fields(&[
            ("faculty_id", "6"),
            ("section_id", "2"),
            ("week_id", "1"),
            ("attendance_date", "02/02/2026"),
            ("att_abc", "on"),
        ]))
        .unwrap();
        assert!(form.absent.is_empty());
    }
}

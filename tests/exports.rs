mod common;

use axum::http::{header, StatusCode};

use common::{body_bytes, body_string, form_post_with_session, get, get_with_session, login, send, spawn};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[tokio::test]
async fn day_export_requires_a_date() {
    let app = spawn().await;
    let response = send(&app.router, get("/download-excel")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "Missing parameters");
}

#[tokio::test]
async fn day_export_with_no_rows_is_a_valid_header_only_workbook() {
    let app = spawn().await;
    let response = send(&app.router, get("/download-excel?date=2026-02-02")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        XLSX_MIME
    );
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"Attendance_2026-02-02.xlsx\""
    );
    let bytes = body_bytes(response).await;
    assert_eq!(&bytes[..2], b"PK", "xlsx output is a zip container");
}

#[tokio::test]
async fn day_export_covers_marked_attendance() {
    let app = spawn().await;
    let session = login(&app.router, "faculty", 6, "pw6", 2).await;
    send(
        &app.router,
        form_post_with_session(
            "/save",
            "faculty_id=6&section_id=2&week_id=3&attendance_date=02%2F02%2F2026&att_201=on",
            &session,
        ),
    )
    .await;

    let response = send(&app.router, get("/download-excel?date=2026-02-02")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = body_bytes(response).await;
    // two data rows on top of the header make it bigger than the empty sheet
    let empty = send(&app.router, get("/download-excel?date=2026-03-02")).await;
    let empty_bytes = body_bytes(empty).await;
    assert!(bytes.len() > empty_bytes.len());
}

#[tokio::test]
async fn audit_export_is_admin_only() {
    let app = spawn().await;

    let faculty = login(&app.router, "faculty", 1, "pw1", 1).await;
    let response = send(
        &app.router,
        get_with_session("/download-faculty-report", &faculty),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_string(response).await, "Access Denied");

    let admin = login(&app.router, "admin", 3, "pwh", 1).await;
    let response = send(
        &app.router,
        get_with_session("/download-faculty-report", &admin),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"Faculty_Attendance_Audit.xlsx\""
    );
}

#[tokio::test]
async fn student_export_validates_parameters() {
    let app = spawn().await;

    let response = send(&app.router, get("/download-student-excel")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "Missing parameters");

    let response = send(
        &app.router,
        get("/download-student-excel?student_id=101"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(
        &app.router,
        get("/download-student-excel?student_id=101&date=02-02-2026"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "Invalid date");

    let response = send(
        &app.router,
        get("/download-student-excel?student_id=101&date=2026-02-02"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"Student_Attendance_2026-02-02.xlsx\""
    );
}

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::NaiveDate;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

use attendance_register::web::{app, AppState};

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

/// In-memory database with the real schema and a small seeded campus:
/// two sections, a mix of roles, an elective split (groups GT/DF in
/// section 1) and one faculty deliberately double-scheduled across groups.
pub async fn spawn() -> TestApp {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::raw_sql(include_str!("../../schema.sql"))
        .execute(&pool)
        .await
        .unwrap();
    sqlx::raw_sql(SEED).execute(&pool).await.unwrap();

    let state = AppState {
        pool: pool.clone(),
        session_secret: "test-secret".to_string(),
        semester_start: NaiveDate::from_ymd_opt(2026, 1, 19).unwrap(),
    };

    TestApp {
        router: app(state),
        pool,
    }
}

const SEED: &str = r#"
INSERT INTO sections (section_id, section_name) VALUES
  (1, 'CSE-A'),
  (2, 'CSE-B');

INSERT INTO faculty (faculty_id, name, role, password) VALUES
  (1, 'Anil',   'faculty', 'pw1'),
  (2, 'Bina',   'faculty', 'pw2'),
  (3, 'Chitra', 'hod',     'pwh'),
  (4, 'Deepak', 'ahod',    'pwa'),
  (5, 'Esha',   'faculty', 'abc'),
  (6, 'Farid',  'faculty', 'pw6'),
  (7, 'Gita',   'faculty', 'pw7');

INSERT INTO students (student_id, roll_no, name, section_id, group_id) VALUES
  (101, '01', 'Asha',  1, 'GT'),
  (102, '02', 'Balu',  1, NULL),
  (103, '03', 'Chand', 1, 'DF'),
  (201, '01', 'Dev',   2, NULL),
  (202, '02', 'Ela',   2, NULL);

INSERT INTO class_schedule (faculty_id, section_id, subject, day_of_week, period_no, group_id) VALUES
  (1, 1, 'Math',                'Monday',    1, NULL),
  (1, 1, 'Math',                'Tuesday',   2, NULL),
  (2, 1, 'Game Theory',         'Monday',    3, 'GT'),
  (5, 1, 'Physics',             'Wednesday', 1, NULL),
  (6, 2, 'Chemistry',           'Monday',    1, NULL),
  (7, 1, 'Game Theory',         'Friday',    4, 'GT'),
  (7, 1, 'Design Fundamentals', 'Friday',    5, 'DF');
"#;

pub async fn send(router: &Router, request: Request<Body>) -> Response {
    router.clone().oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub fn form_post(path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_session(path: &str, session: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(path)
        .header(header::COOKIE, session.to_string())
        .body(Body::empty())
        .unwrap()
}

pub fn form_post_with_session(path: &str, body: &str, session: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::COOKIE, session.to_string())
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Logs in and returns the `session=...` cookie pair for follow-up requests.
pub async fn login(
    router: &Router,
    login_type: &str,
    faculty_id: i64,
    password: &str,
    section_id: i64,
) -> String {
    let body = format!(
        "login_type={}&faculty_id={}&password={}&section_id={}",
        login_type, faculty_id, password, section_id
    );
    let response = send(router, form_post("/faculty-login", &body)).await;
    assert_eq!(
        response.status(),
        StatusCode::SEE_OTHER,
        "login should redirect"
    );
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login sets a session cookie")
        .to_str()
        .unwrap();
    cookie
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

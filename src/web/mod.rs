pub mod middleware;
pub mod routes;
pub mod session;

use axum::{
    extract::FromRef,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use http::header::{HeaderValue, CACHE_CONTROL};
use sqlx::SqlitePool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub session_secret: String,
    pub semester_start: NaiveDate,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> SqlitePool {
        state.pool.clone()
    }
}

/// Assembles the full application router. Session-only routes sit behind the
/// auth middleware; everything else mirrors the public surface.
pub fn app(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/admin-dashboard", get(routes::dashboard::admin_dashboard))
        .route(
            "/faculty-dashboard",
            get(routes::dashboard::faculty_dashboard),
        )
        .route("/faculty-audit", get(routes::reports::faculty_audit))
        .route("/admin-attendance", get(routes::reports::admin_attendance))
        .route(
            "/attendance/:faculty_id/:section_id",
            get(routes::attendance::marking_page),
        )
        .route("/save", post(routes::attendance::save))
        .route("/week-report", get(routes::reports::week_report))
        .route("/daily-summary", get(routes::reports::daily_summary))
        .route(
            "/download-faculty-report",
            get(routes::exports::download_faculty_report),
        )
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_session,
        ));

    Router::new()
        .route("/", get(routes::home::index))
        .route("/faculty-login", post(routes::auth::login))
        .route("/select", post(routes::home::select))
        .route("/student-report", get(routes::students::student_report))
        .route(
            "/get-students/:section_id",
            get(routes::students::get_students),
        )
        .route("/get-subjects", get(routes::students::get_subjects))
        .route(
            "/get-student-attendance/:student_id",
            get(routes::students::get_student_attendance),
        )
        .route("/download-excel", get(routes::exports::download_excel))
        .route(
            "/download-student-excel",
            get(routes::exports::download_student_excel),
        )
        .route("/logout", get(routes::auth::logout))
        .merge(protected_routes)
        // Reports must never be served from cache.
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .with_state(state)
}

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use cookie::Cookie;
use serde::Deserialize;
use tracing::warn;

use crate::database::{faculty_repo, schedule_repo};
use crate::models::Role;
use crate::web::routes::db_error_response;
use crate::web::session::{self, AuthContext, SESSION_COOKIE};
use crate::web::AppState;

#[derive(Deserialize)]
pub struct LoginForm {
    pub login_type: String, // faculty|admin
    pub faculty_id: i64,
    pub password: String,
    pub section_id: i64,
}

/// Exact-match credential check, role/login-type validation, section
/// assignment check for plain faculty, then a signed session cookie and a
/// redirect to the dashboard matching the role.
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    let auth_row = match faculty_repo::authenticate(&state.pool, form.faculty_id, &form.password)
        .await
    {
        Ok(row) => row,
        Err(e) => return db_error_response(e),
    };

    let Some(auth_row) = auth_row else {
        return (StatusCode::FORBIDDEN, "Invalid credentials").into_response();
    };

    let Some(role) = Role::from_db(&auth_row.role) else {
        warn!(
            "faculty {} has unknown role {:?}",
            auth_row.faculty_id, auth_row.role
        );
        return (StatusCode::FORBIDDEN, "Invalid credentials").into_response();
    };

    if form.login_type == "faculty" && role != Role::Faculty {
        return (StatusCode::FORBIDDEN, "Use HOD/AHOD login").into_response();
    }
    if form.login_type == "admin" && !role.is_admin() {
        return (StatusCode::FORBIDDEN, "Unauthorized admin access").into_response();
    }

    if role == Role::Faculty {
        match schedule_repo::teaches_section(&state.pool, auth_row.faculty_id, form.section_id)
            .await
        {
            Ok(true) => {}
            Ok(false) => {
                return (
                    StatusCode::FORBIDDEN,
                    "You are not assigned to this section.",
                )
                    .into_response();
            }
            Err(e) => return db_error_response(e),
        }
    }

    let ctx = AuthContext {
        faculty_id: auth_row.faculty_id,
        role,
        section_id: form.section_id,
    };

    let mut session_cookie = Cookie::new(SESSION_COOKIE, session::encode(&ctx, &state.session_secret));
    session_cookie.set_path("/");
    session_cookie.set_http_only(true);
    session_cookie.set_same_site(cookie::SameSite::Lax);

    let target = if role.is_admin() {
        "/admin-dashboard"
    } else {
        "/faculty-dashboard"
    };

    let mut response = Redirect::to(target).into_response();
    response.headers_mut().append(
        header::SET_COOKIE,
        session_cookie.to_string().parse().unwrap(),
    );
    response
}

pub async fn logout() -> Response {
    let mut session_cookie = Cookie::new(SESSION_COOKIE, "");
    session_cookie.set_path("/");
    session_cookie.set_http_only(true);
    session_cookie.set_same_site(cookie::SameSite::Lax);
    session_cookie.set_max_age(None);

    let mut response = Redirect::to("/").into_response();
    response.headers_mut().append(
        header::SET_COOKIE,
        session_cookie.to_string().parse().unwrap(),
    );
    response
}

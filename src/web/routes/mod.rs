pub mod attendance;
pub mod auth;
pub mod dashboard;
pub mod exports;
pub mod home;
pub mod reports;
pub mod students;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::services::ServiceError;

/// Shared mapping from service failures to plain text responses. Ambiguous
/// elective scheduling is a data conflict the caller must fix; everything
/// else is logged and reported as a server error.
pub fn service_error_response(err: ServiceError) -> Response {
    match err {
        ServiceError::AmbiguousElectiveGroup { .. } => {
            error!("{}", err);
            (
                StatusCode::CONFLICT,
                "Faculty is scheduled under multiple elective groups for this section",
            )
                .into_response()
        }
        ServiceError::Db(e) => {
            error!("database error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
        }
    }
}

pub fn db_error_response(e: sqlx::Error) -> Response {
    error!("database error: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
}

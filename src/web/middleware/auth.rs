use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::web::session::{self, SESSION_COOKIE};
use crate::web::AppState;

/// Guards the session-only routes. A valid session cookie is decoded into an
/// `AuthContext` request extension; anything else goes back to the landing
/// page to log in again.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let prefix = format!("{}=", SESSION_COOKIE);
    let ctx = request
        .headers()
        .get(header::COOKIE)
        .and_then(|hv| hv.to_str().ok())
        .and_then(|cookies| {
            cookies
                .split("; ")
                .find_map(|c| c.strip_prefix(prefix.as_str()))
        })
        .and_then(|value| session::decode(value, &state.session_secret));

    match ctx {
        Some(ctx) => {
            request.extensions_mut().insert(ctx);
            next.run(request).await
        }
        None => Redirect::to("/").into_response(),
    }
}

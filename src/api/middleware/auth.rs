//! Session authentication middleware.
//!
//! Protected routes resolve the caller's identity before any handler or
//! store access runs. The session token is taken from either:
//!
//! ```text
//! Authorization: Bearer <token>
//! Cookie: session_token=<token>
//! ```
//!
//! The Bearer form serves API clients; the cookie is what login sets for
//! browsers. On success the resolved [`crate::domain::entities::Identity`]
//! (and the raw token, for logout) are attached to the request as extensions.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header::COOKIE},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::{error::AppError, state::AppState};

/// Name of the session cookie set at login.
pub const SESSION_COOKIE: &str = "session_token";

/// Raw session token of the authenticated request, kept for logout.
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

/// Authenticates a request and injects the caller's identity.
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Neither a Bearer header nor a session cookie is present
/// - The token matches no session
/// - The session has expired or its user no longer exists
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let token = match AuthBearer::from_request_parts(&mut parts, &()).await {
        Ok(AuthBearer(token)) => Some(token),
        Err(_) => session_cookie(&parts.headers),
    };

    let mut req = Request::from_parts(parts, body);

    let Some(token) = token else {
        return Err(AppError::unauthorized(
            "Unauthorized",
            json!({ "reason": "Missing session credentials" }),
        ));
    };

    match st.auth_service.resolve_identity(&token).await? {
        Some(identity) => {
            req.extensions_mut().insert(identity);
            req.extensions_mut().insert(SessionToken(token));
            Ok(next.run(req).await)
        }
        None => Err(AppError::unauthorized(
            "Unauthorized",
            json!({ "reason": "Invalid or expired session" }),
        )),
    }
}

/// Extracts the session token from the `Cookie` header, ignoring any other
/// cookies the client sends along.
fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let (key, value) = cookie.trim().split_once('=')?;
                (key == SESSION_COOKIE).then(|| value.to_string())
            })
        })
}

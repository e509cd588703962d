//! Handlers for login and logout.

use axum::{
    Extension, Json,
    extract::State,
    http::header,
    response::{AppendHeaders, IntoResponse, Response},
};
use chrono::Utc;
use serde_json::json;
use validator::Validate;

use crate::api::dto::login::{LoginRequest, LoginResponse, SuccessResponse};
use crate::api::middleware::auth::{SESSION_COOKIE, SessionToken};
use crate::error::AppError;
use crate::state::AppState;

/// Verifies credentials and opens a session.
///
/// # Endpoint
///
/// `POST /api/login` (public)
///
/// # Response
///
/// The session token is returned in the body and set as an `HttpOnly`
/// cookie scoped to the whole site:
///
/// ```text
/// Set-Cookie: session_token=<token>; Path=/; HttpOnly; SameSite=Lax; Max-Age=<ttl>
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when email or password is missing/empty.
/// Returns 401 Unauthorized on bad credentials — the same response for an
/// unknown email and a wrong password.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let email = payload.email.ok_or_else(missing_credentials)?;
    let password = payload.password.ok_or_else(missing_credentials)?;

    let session = state.auth_service.login(&email, &password).await?;

    let max_age = (session.expires - Utc::now()).num_seconds().max(0);
    let cookie = format!(
        "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}",
        session.session_token
    );

    let body = LoginResponse {
        token: session.session_token,
        expires: session.expires,
    };

    Ok((AppendHeaders([(header::SET_COOKIE, cookie)]), Json(body)).into_response())
}

/// Closes the caller's session.
///
/// # Endpoint
///
/// `POST /api/logout` (session required)
///
/// Deletes the session row and expires the cookie. Logging out a session
/// that has already been removed still succeeds.
pub async fn logout_handler(
    State(state): State<AppState>,
    Extension(token): Extension<SessionToken>,
) -> Result<Response, AppError> {
    state.auth_service.logout(&token.0).await?;

    let cookie = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");

    Ok((
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Json(SuccessResponse { success: true }),
    )
        .into_response())
}

fn missing_credentials() -> AppError {
    AppError::bad_request(
        "Email and password are required",
        json!({ "required": ["email", "password"] }),
    )
}

//! Handler for account registration.

use axum::{Json, extract::State};
use serde_json::json;
use validator::Validate;

use crate::api::dto::register::{RegisterRequest, UserResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account.
///
/// # Endpoint
///
/// `POST /api/register` (public)
///
/// # Request Body
///
/// ```json
/// { "name": "Ada", "email": "ada@example.com", "password": "hunter2" }
/// ```
///
/// `name` is optional.
///
/// # Errors
///
/// Returns 400 Bad Request when email or password is missing/empty, or when
/// the email is already registered. The stored credential is a keyed hash;
/// the response never echoes it.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, AppError> {
    payload.validate()?;

    let email = payload.email.ok_or_else(missing_credentials)?;
    let password = payload.password.ok_or_else(missing_credentials)?;

    let user = state
        .auth_service
        .register(payload.name, email, password)
        .await?;

    Ok(Json(user.into()))
}

fn missing_credentials() -> AppError {
    AppError::bad_request(
        "Email and password are required",
        json!({ "required": ["email", "password"] }),
    )
}

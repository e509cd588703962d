//! DTOs for the login and logout endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /api/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email must not be empty"))]
    pub email: Option<String>,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: Option<String>,
}

/// Response for a successful login.
///
/// The token is also set as an `HttpOnly` cookie; the body copy exists for
/// non-browser clients that authenticate with a Bearer header instead.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires: DateTime<Utc>,
}

/// Acknowledgment body shared by logout and delete.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

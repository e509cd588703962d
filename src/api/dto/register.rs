//! DTOs for the registration endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::User;

/// Request body for `POST /api/register`.
///
/// `email` and `password` are required; rejecting their absence in the
/// handler (rather than at deserialization) keeps the missing-field outcome
/// a 400 like any other validation failure.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Email must not be empty"))]
    pub email: Option<String>,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: Option<String>,
}

/// Public view of a user. Never carries the credential.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

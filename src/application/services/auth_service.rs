//! Account and session service.
//!
//! Owns everything credential-shaped: registration, login, session issue
//! and teardown, and per-request identity resolution.

use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::{Identity, NewSession, NewUser, Session, User};
use crate::domain::repositories::{SessionRepository, UserRepository};
use crate::error::AppError;
use crate::utils::code_generator::{generate_record_id, generate_session_token};

type HmacSha256 = Hmac<Sha256>;

/// Service for accounts and authenticated sessions.
///
/// Passwords are hashed with HMAC-SHA256 keyed by `signing_secret` before
/// storage and comparison. An attacker with read-only access to the database
/// cannot verify or forge credentials without the server-side secret.
pub struct AuthService<U: UserRepository, S: SessionRepository> {
    users: Arc<U>,
    sessions: Arc<S>,
    signing_secret: String,
    session_ttl: Duration,
}

impl<U: UserRepository, S: SessionRepository> AuthService<U, S> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `users` / `sessions` - repositories for DB operations
    /// - `signing_secret` - HMAC key; must match the value used when existing
    ///   credentials were hashed
    /// - `session_ttl` - lifetime of newly issued sessions
    pub fn new(users: Arc<U>, sessions: Arc<S>, signing_secret: String, session_ttl: Duration) -> Self {
        Self {
            users,
            sessions,
            signing_secret,
            session_ttl,
        }
    }

    /// Hashes a raw password with HMAC-SHA256 under the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    fn hash_password(&self, password: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(password.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the email is already taken.
    /// Returns [`AppError::Internal`] on database errors, including losing a
    /// race against a concurrent registration of the same email.
    pub async fn register(
        &self,
        name: Option<String>,
        email: String,
        password: String,
    ) -> Result<User, AppError> {
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::bad_request(
                "User already exists",
                json!({ "email": email }),
            ));
        }

        let new_user = NewUser {
            id: generate_record_id(),
            name,
            password: self.hash_password(&password),
            email,
        };

        self.users.create(new_user).await
    }

    /// Verifies credentials and issues a new session.
    ///
    /// Unknown email and wrong password produce the same outcome so the
    /// endpoint does not reveal which accounts exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on credential mismatch.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AppError> {
        let invalid =
            || AppError::unauthorized("Invalid email or password", json!({ "email": email }));

        let user = self.users.find_by_email(email).await?.ok_or_else(invalid)?;

        if user.password != self.hash_password(password) {
            return Err(invalid());
        }

        let new_session = NewSession {
            id: generate_record_id(),
            session_token: generate_session_token(),
            user_id: user.id,
            expires: Utc::now() + self.session_ttl,
        };

        self.sessions.create(new_session).await
    }

    /// Resolves a session token to the caller's identity.
    ///
    /// Yields `None` for an unknown token, an expired session, or a session
    /// whose user row no longer exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve_identity(&self, token: &str) -> Result<Option<Identity>, AppError> {
        let Some(session) = self.sessions.find_by_token(token).await? else {
            return Ok(None);
        };

        if session.is_expired(Utc::now()) {
            return Ok(None);
        }

        let identity = self.users.find_by_id(&session.user_id).await?.map(|user| Identity {
            user_id: user.id,
            email: user.email,
            name: user.name,
        });

        Ok(identity)
    }

    /// Removes a session.
    ///
    /// Returns whether a row was deleted; logging out an already-dead token
    /// is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn logout(&self, token: &str) -> Result<bool, AppError> {
        self.sessions.delete_by_token(token).await
    }
}

//! Repository trait for session data access.

use crate::domain::entities::{NewSession, Session};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for authenticated sessions.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteSessionRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Inserts a new session and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_session: NewSession) -> Result<Session, AppError>;

    /// Finds a session by its opaque token.
    ///
    /// Expiry is not filtered here; callers decide what an expired session
    /// means.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_token(&self, session_token: &str) -> Result<Option<Session>, AppError>;

    /// Deletes a session by its token.
    ///
    /// Returns `Ok(true)` if a row was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_token(&self, session_token: &str) -> Result<bool, AppError>;
}

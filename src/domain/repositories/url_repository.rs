//! Repository trait for short URL data access.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short URLs.
///
/// Mutations that act on behalf of a user take the owner's id and match it
/// in the same statement as the row lookup, so a missing row and a row owned
/// by someone else are indistinguishable to callers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new short URL and returns the stored record.
    ///
    /// The returned record is re-read by id after the insert so the response
    /// reflects exactly what the store persisted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a
    /// short-token uniqueness violation.
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a short URL by its record id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Lists all short URLs owned by a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_owner(&self, user_id: &str) -> Result<Vec<ShortUrl>, AppError>;

    /// Updates the destination of an owned record and refreshes `updated_at`.
    ///
    /// Returns `Ok(None)` when no row matches both `id` and `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_destination(
        &self,
        id: &str,
        user_id: &str,
        original_url: &str,
    ) -> Result<Option<ShortUrl>, AppError>;

    /// Deletes an owned record.
    ///
    /// Returns `Ok(true)` if a row matching both `id` and `user_id` was
    /// removed, `Ok(false)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_owned(&self, id: &str, user_id: &str) -> Result<bool, AppError>;

    /// Resolves a short token to its destination, counting the visit.
    ///
    /// Increments `clicks` and returns the destination in one atomic
    /// statement; at-least-once per physical request under concurrency.
    /// Returns `Ok(None)` for an unknown token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn resolve_and_count_click(&self, short_url: &str) -> Result<Option<String>, AppError>;
}

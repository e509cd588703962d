//! Short URL management and redirect resolution service.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{Identity, NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_record_id, generate_short_code};

/// Service for owner-scoped link management and public redirect resolution.
///
/// Ownership is keyed by the caller's user id for every mutation. A missing
/// record and a record owned by someone else produce the same not-found
/// outcome, so callers can never probe for other users' link ids.
pub struct UrlService<R: UrlRepository> {
    repository: Arc<R>,
}

impl<R: UrlRepository> UrlService<R> {
    /// Creates a new URL service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a short URL owned by the caller.
    ///
    /// Generates a fresh record id and an 8-character short token. The token
    /// is not checked for collisions before insert; the UNIQUE constraint
    /// backstops it and a collision surfaces as a storage error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_short_url(
        &self,
        owner: &Identity,
        original_url: String,
    ) -> Result<ShortUrl, AppError> {
        let new_url = NewShortUrl {
            id: generate_record_id(),
            short_url: generate_short_code(),
            user_id: owner.user_id.clone(),
            original_url,
        };

        self.repository.create(new_url).await
    }

    /// Lists the caller's short URLs, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_owned(&self, owner: &Identity) -> Result<Vec<ShortUrl>, AppError> {
        self.repository.list_by_owner(&owner.user_id).await
    }

    /// Replaces the destination of an owned record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no record matches the id under
    /// the caller's ownership — whether it belongs to someone else or does
    /// not exist at all.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_destination(
        &self,
        owner: &Identity,
        id: &str,
        original_url: &str,
    ) -> Result<ShortUrl, AppError> {
        self.repository
            .update_destination(id, &owner.user_id, original_url)
            .await?
            .ok_or_else(|| {
                AppError::not_found("URL not found or unauthorized", json!({ "id": id }))
            })
    }

    /// Deletes an owned record.
    ///
    /// # Errors
    ///
    /// Same not-found collapsing as [`Self::update_destination`].
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_owned(&self, owner: &Identity, id: &str) -> Result<(), AppError> {
        let deleted = self.repository.delete_owned(id, &owner.user_id).await?;

        if !deleted {
            return Err(AppError::not_found(
                "URL not found or unauthorized",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    /// Resolves a short token to its destination, recording the visit.
    ///
    /// Returns `Ok(None)` for an unknown token; the caller decides how a
    /// miss is presented (the public redirect falls back to home).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve_click(&self, short_url: &str) -> Result<Option<String>, AppError> {
        self.repository.resolve_and_count_click(short_url).await
    }
}

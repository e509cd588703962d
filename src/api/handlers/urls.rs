//! Handlers for short URL management (create, list, update, delete).
//!
//! All four endpoints require an authenticated session; the resolved
//! [`Identity`] arrives as a request extension from the auth middleware and
//! its user id scopes every store operation.

use axum::{
    Extension, Json,
    extract::{Query, State},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::login::SuccessResponse;
use crate::api::dto::url::{CreateUrlRequest, DeleteUrlQuery, UpdateUrlRequest, UrlResponse};
use crate::domain::entities::Identity;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL owned by the caller.
///
/// # Endpoint
///
/// `POST /api/urls`
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "https://example.com/some/long/path" }
/// ```
///
/// The destination may be any non-empty string; no scheme or host checks
/// are applied.
///
/// # Response
///
/// The full created record, with a freshly generated 8-character short
/// token and `clicks` at zero.
///
/// # Errors
///
/// Returns 400 Bad Request when `originalUrl` is missing or empty.
/// A short-token collision is not retried and surfaces as a 500.
pub async fn create_url_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<CreateUrlRequest>,
) -> Result<Json<UrlResponse>, AppError> {
    payload.validate()?;

    let original_url = payload.original_url.ok_or_else(|| {
        AppError::bad_request("URL is required", json!({ "field": "originalUrl" }))
    })?;

    let url = state
        .url_service
        .create_short_url(&identity, original_url)
        .await?;

    Ok(Json(url.into()))
}

/// Lists the caller's short URLs, newest first.
///
/// # Endpoint
///
/// `GET /api/urls`
pub async fn list_urls_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Vec<UrlResponse>>, AppError> {
    let urls = state.url_service.list_owned(&identity).await?;

    Ok(Json(urls.into_iter().map(Into::into).collect()))
}

/// Replaces the destination of an owned record.
///
/// # Endpoint
///
/// `PATCH /api/urls`
///
/// # Request Body
///
/// ```json
/// { "id": "<record id>", "originalUrl": "https://new-destination.example" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when `id` or `originalUrl` is missing/empty.
/// Returns 404 Not Found when the record does not exist **or** belongs to
/// another user; the two cases are indistinguishable by design.
pub async fn update_url_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<UpdateUrlRequest>,
) -> Result<Json<UrlResponse>, AppError> {
    payload.validate()?;

    let id = payload.id.ok_or_else(|| {
        AppError::bad_request("Missing required fields", json!({ "field": "id" }))
    })?;
    let original_url = payload.original_url.ok_or_else(|| {
        AppError::bad_request("Missing required fields", json!({ "field": "originalUrl" }))
    })?;

    let url = state
        .url_service
        .update_destination(&identity, &id, &original_url)
        .await?;

    Ok(Json(url.into()))
}

/// Deletes an owned record.
///
/// # Endpoint
///
/// `DELETE /api/urls?id=<record id>`
///
/// # Errors
///
/// Returns 400 Bad Request when `id` is absent.
/// Same 404 collapsing as update.
pub async fn delete_url_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(query): Query<DeleteUrlQuery>,
) -> Result<Json<SuccessResponse>, AppError> {
    let id = query
        .id
        .ok_or_else(|| AppError::bad_request("Missing URL ID", json!({ "field": "id" })))?;

    state.url_service.delete_owned(&identity, &id).await?;

    Ok(Json(SuccessResponse { success: true }))
}

//! DTOs for the short URL management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortUrl;

/// Request body for `POST /api/urls`.
///
/// The destination is accepted as an arbitrary non-empty string; no scheme
/// or host validation is performed.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUrlRequest {
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub original_url: Option<String>,
}

/// Request body for `PATCH /api/urls`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUrlRequest {
    #[validate(length(min = 1, message = "Id must not be empty"))]
    pub id: Option<String>,

    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub original_url: Option<String>,
}

/// Query parameters for `DELETE /api/urls?id=`.
#[derive(Debug, Deserialize)]
pub struct DeleteUrlQuery {
    pub id: Option<String>,
}

/// Full short URL record as returned to its owner.
#[derive(Debug, Serialize)]
pub struct UrlResponse {
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    pub clicks: i64,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ShortUrl> for UrlResponse {
    fn from(url: ShortUrl) -> Self {
        Self {
            id: url.id,
            original_url: url.original_url,
            short_url: url.short_url,
            clicks: url.clicks,
            user_id: url.user_id,
            created_at: url.created_at,
            updated_at: url.updated_at,
        }
    }
}

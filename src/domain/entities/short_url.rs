//! Short URL entity mapping a short token to its destination.

use chrono::{DateTime, Utc};

/// A shortened URL owned by a user.
///
/// `short_url` is the globally unique short token; `original_url` is an
/// arbitrary non-empty string supplied by the owner. `clicks` starts at zero
/// and only ever grows, incremented by the public redirect path.
#[derive(Debug, Clone)]
pub struct ShortUrl {
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    pub clicks: i64,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShortUrl {
    /// Returns true if the given user owns this record.
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

/// Input data for creating a new short URL.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    pub user_id: String,
}

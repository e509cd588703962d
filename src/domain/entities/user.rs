//! User entity representing a registered account.

use chrono::{DateTime, Utc};

/// A registered account that owns short links and sessions.
///
/// The `password` field holds the keyed hash of the credential, never the
/// plaintext. It stays on the entity so login can verify it, and is stripped
/// before anything is serialized back to a client.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    /// Already-hashed credential.
    pub password: String,
}

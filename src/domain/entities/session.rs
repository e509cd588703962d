//! Session entity binding an opaque token to a user.

use chrono::{DateTime, Utc};

/// An authenticated session issued at login.
///
/// The token is the client-held credential; `expires` bounds its lifetime.
/// Rows are removed on logout and cascade-deleted with their user.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub session_token: String,
    pub user_id: String,
    pub expires: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Returns true if the session has passed its expiry instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires
    }
}

/// Input data for creating a new session.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub id: String,
    pub session_token: String,
    pub user_id: String,
    pub expires: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session_expiring_at(expires: DateTime<Utc>) -> Session {
        let now = Utc::now();
        Session {
            id: "sess-1".to_string(),
            session_token: "token".to_string(),
            user_id: "user-1".to_string(),
            expires,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_session_not_expired() {
        let session = session_expiring_at(Utc::now() + Duration::hours(1));
        assert!(!session.is_expired(Utc::now()));
    }

    #[test]
    fn test_session_expired() {
        let session = session_expiring_at(Utc::now() - Duration::seconds(1));
        assert!(session.is_expired(Utc::now()));
    }
}

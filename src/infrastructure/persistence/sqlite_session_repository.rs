//! SQLite implementation of the session repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::entities::{NewSession, Session};
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;

/// Row shape for the `sessions` table.
#[derive(sqlx::FromRow)]
struct SessionRow {
    id: String,
    session_token: String,
    user_id: String,
    expires: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SessionRow> for Session {
    fn from(row: SessionRow) -> Self {
        Session {
            id: row.id,
            session_token: row.session_token,
            user_id: row.user_id,
            expires: row.expires,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const SELECT_SESSION: &str =
    "SELECT id, session_token, user_id, expires, created_at, updated_at FROM sessions";

/// SQLite repository for authenticated sessions.
pub struct SqliteSessionRepository {
    pool: SqlitePool,
}

impl SqliteSessionRepository {
    /// Creates a new repository over a connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepository {
    async fn create(&self, new_session: NewSession) -> Result<Session, AppError> {
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO sessions (id, session_token, user_id, expires, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&new_session.id)
        .bind(&new_session.session_token)
        .bind(&new_session.user_id)
        .bind(new_session.expires)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let row = sqlx::query_as::<_, SessionRow>(&format!("{SELECT_SESSION} WHERE id = ?"))
            .bind(&new_session.id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into())
    }

    async fn find_by_token(&self, session_token: &str) -> Result<Option<Session>, AppError> {
        let row =
            sqlx::query_as::<_, SessionRow>(&format!("{SELECT_SESSION} WHERE session_token = ?"))
                .bind(session_token)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(Into::into))
    }

    async fn delete_by_token(&self, session_token: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM sessions WHERE session_token = ?")
            .bind(session_token)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

//! SQLite implementation of the short URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Row shape for the `urls` table.
#[derive(sqlx::FromRow)]
struct UrlRow {
    id: String,
    original_url: String,
    short_url: String,
    clicks: i64,
    user_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UrlRow> for ShortUrl {
    fn from(row: UrlRow) -> Self {
        ShortUrl {
            id: row.id,
            original_url: row.original_url,
            short_url: row.short_url,
            clicks: row.clicks,
            user_id: row.user_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const SELECT_URL: &str =
    "SELECT id, original_url, short_url, clicks, user_id, created_at, updated_at FROM urls";

/// SQLite repository for short URL storage and retrieval.
///
/// Every mutation is a single statement; the store's per-statement atomicity
/// is the only concurrency control in play.
pub struct SqliteUrlRepository {
    pool: SqlitePool,
}

impl SqliteUrlRepository {
    /// Creates a new repository over a connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO urls (id, original_url, short_url, clicks, user_id, created_at, updated_at) \
             VALUES (?, ?, ?, 0, ?, ?, ?)",
        )
        .bind(&new_url.id)
        .bind(&new_url.original_url)
        .bind(&new_url.short_url)
        .bind(&new_url.user_id)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        // Re-read by id so the response carries exactly what was persisted.
        let row = sqlx::query_as::<_, UrlRow>(&format!("{SELECT_URL} WHERE id = ?"))
            .bind(&new_url.id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(&format!("{SELECT_URL} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Into::into))
    }

    async fn list_by_owner(&self, user_id: &str) -> Result<Vec<ShortUrl>, AppError> {
        let rows = sqlx::query_as::<_, UrlRow>(&format!(
            "{SELECT_URL} WHERE user_id = ? ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update_destination(
        &self,
        id: &str,
        user_id: &str,
        original_url: &str,
    ) -> Result<Option<ShortUrl>, AppError> {
        let result = sqlx::query(
            "UPDATE urls SET original_url = ?, updated_at = ? WHERE id = ? AND user_id = ?",
        )
        .bind(original_url)
        .bind(Utc::now())
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    async fn delete_owned(&self, id: &str, user_id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM urls WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn resolve_and_count_click(&self, short_url: &str) -> Result<Option<String>, AppError> {
        let destination = sqlx::query_scalar::<_, String>(
            "UPDATE urls SET clicks = clicks + 1 WHERE short_url = ? RETURNING original_url",
        )
        .bind(short_url)
        .fetch_optional(&self.pool)
        .await?;

        Ok(destination)
    }
}

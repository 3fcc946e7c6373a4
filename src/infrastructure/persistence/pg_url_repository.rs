//! PostgreSQL implementation of the URL record repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// PostgreSQL repository for URL record storage and retrieval.
///
/// Uses parameterized queries throughout. The `urls_short_code_key` unique
/// constraint is the system's only uniqueness guarantee; inserts fail on a
/// duplicate code instead of overwriting.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            INSERT INTO urls (short_code, long_url, owner_id)
            VALUES ($1, $2, $3)
            RETURNING id, short_code, long_url, owner_id, clicks, created_at
            "#,
        )
        .bind(&new_record.short_code)
        .bind(&new_record.long_url)
        .bind(&new_record.owner_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, short_code, long_url, owner_id, clicks, created_at
            FROM urls
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn find_by_long_url(
        &self,
        long_url: &str,
        owner_id: Option<String>,
    ) -> Result<Option<UrlRecord>, AppError> {
        // IS NOT DISTINCT FROM keeps NULL owners comparable, so anonymous
        // records dedup among themselves.
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, short_code, long_url, owner_id, clicks, created_at
            FROM urls
            WHERE long_url = $1 AND owner_id IS NOT DISTINCT FROM $2
            LIMIT 1
            "#,
        )
        .bind(long_url)
        .bind(owner_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        // Single-statement increment-and-fetch; concurrent resolves compose
        // without external locking and an unknown code touches nothing.
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            UPDATE urls
            SET clicks = clicks + 1
            WHERE short_code = $1
            RETURNING id, short_code, long_url, owner_id, clicks, created_at
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<UrlRecord>, AppError> {
        let records = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, short_code, long_url, owner_id, clicks, created_at
            FROM urls
            WHERE owner_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(records)
    }
}

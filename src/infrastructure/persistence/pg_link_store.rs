//! PostgreSQL implementation of the link store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{LinkRecord, NewLink};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use serde_json::json;

/// PostgreSQL store for short links.
///
/// Key uniqueness is backed by the `links_short_key_key` unique constraint.
/// Inserts use `ON CONFLICT DO NOTHING`, so a taken key is reported as
/// [`AppError::Conflict`] without aborting the surrounding statement.
pub struct PgLinkStore {
    pool: Arc<PgPool>,
}

impl PgLinkStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<LinkRecord>, AppError> {
        let record = sqlx::query_as::<_, LinkRecord>(
            r#"
            SELECT id, short_key, long_url, created_at
            FROM links
            WHERE long_url = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn exists(&self, short_key: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM links WHERE short_key = $1)",
        )
        .bind(short_key)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn insert(&self, new_link: NewLink) -> Result<LinkRecord, AppError> {
        let inserted = sqlx::query_as::<_, LinkRecord>(
            r#"
            INSERT INTO links (short_key, long_url)
            VALUES ($1, $2)
            ON CONFLICT (short_key) DO NOTHING
            RETURNING id, short_key, long_url, created_at
            "#,
        )
        .bind(&new_link.short_key)
        .bind(&new_link.long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        inserted.ok_or_else(|| {
            AppError::conflict(
                "Short key already exists",
                json!({ "short_key": new_link.short_key }),
            )
        })
    }

    async fn find_by_short_key(&self, short_key: &str) -> Result<Option<LinkRecord>, AppError> {
        let record = sqlx::query_as::<_, LinkRecord>(
            r#"
            SELECT id, short_key, long_url, created_at
            FROM links
            WHERE short_key = $1
            "#,
        )
        .bind(short_key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn health_check(&self) -> bool {
        match sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
        {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Database health check failed: {}", e);
                false
            }
        }
    }
}

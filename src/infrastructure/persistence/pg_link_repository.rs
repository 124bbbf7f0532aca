//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Link, NewLink};
use crate::domain::errors::RepositoryError;
use crate::domain::repositories::LinkRepository;
use crate::utils::db_error::is_unique_violation_on_code;

/// Row shape of the `links` table.
#[derive(Debug, sqlx::FromRow)]
struct LinkRow {
    id: Uuid,
    target_url: String,
    short_code: String,
    last_access: Option<DateTime<Utc>>,
    access_count: i64,
    created_at: DateTime<Utc>,
    expire_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link {
            id: row.id,
            target_url: row.target_url,
            short_code: row.short_code,
            last_access: row.last_access,
            access_count: row.access_count,
            created_at: row.created_at,
            expire_at: row.expire_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        }
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// Uses SQLx prepared statements with bound parameters. Access counting is a
/// single `UPDATE ... SET access_count = access_count + 1`, so concurrent
/// redirects never lose increments.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, RepositoryError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (id, target_url, short_code, expire_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, target_url, short_code, last_access, access_count,
                      created_at, expire_at, updated_at, deleted_at
            "#,
        )
        .bind(new_link.id)
        .bind(&new_link.target_url)
        .bind(&new_link.short_code)
        .bind(new_link.expire_at)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_code(&e) {
                RepositoryError::DuplicateShortCode {
                    code: new_link.short_code.clone(),
                }
            } else {
                RepositoryError::Database(e)
            }
        })?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Link>, RepositoryError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, target_url, short_code, last_access, access_count,
                   created_at, expire_at, updated_at, deleted_at
            FROM links
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn find_active_by_code(&self, code: &str) -> Result<Link, RepositoryError> {
        let link = self.find_by_code(code).await?;

        if link.is_deleted() {
            return Err(RepositoryError::LinkDeleted);
        }

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Link, RepositoryError> {
        sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, target_url, short_code, last_access, access_count,
                   created_at, expire_at, updated_at, deleted_at
            FROM links
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?
        .map(Link::from)
        .ok_or(RepositoryError::NotFound)
    }

    async fn record_access(
        &self,
        id: Uuid,
        accessed_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE links
            SET access_count = access_count + 1,
                last_access = $2,
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .bind(accessed_at)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn soft_delete(&self, code: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE links
            SET deleted_at = NOW(), updated_at = NOW()
            WHERE short_code = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(code)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() > 0 {
            return Ok(());
        }

        // Nothing updated: tell a missing row apart from an already deleted one.
        let already_deleted = sqlx::query_scalar::<_, bool>(
            "SELECT deleted_at IS NOT NULL FROM links WHERE short_code = $1",
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        match already_deleted {
            Some(true) => Err(RepositoryError::LinkDeleted),
            _ => Err(RepositoryError::NotFound),
        }
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}

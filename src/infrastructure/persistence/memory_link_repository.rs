//! Process-local link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Link, NewLink};
use crate::domain::errors::RepositoryError;
use crate::domain::repositories::LinkRepository;

/// In-memory implementation of [`LinkRepository`].
///
/// All mutations take the write lock, so the uniqueness check on create and
/// the counter increment on redirect are atomic with respect to each other.
/// Data lives as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    links: RwLock<Vec<Link>>,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, RepositoryError> {
        let mut links = self.links.write().await;

        if links.iter().any(|l| l.short_code == new_link.short_code) {
            return Err(RepositoryError::DuplicateShortCode {
                code: new_link.short_code,
            });
        }

        if links.iter().any(|l| l.id == new_link.id) {
            return Err(RepositoryError::Backend(format!(
                "link id {} already exists",
                new_link.id
            )));
        }

        let link = new_link.into_link(Utc::now());
        links.push(link.clone());

        Ok(link)
    }

    async fn list(&self) -> Result<Vec<Link>, RepositoryError> {
        let links = self.links.read().await;

        // Reverse first so that equal timestamps keep newest-first order.
        let mut result: Vec<Link> = links.iter().rev().cloned().collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(result)
    }

    async fn find_active_by_code(&self, code: &str) -> Result<Link, RepositoryError> {
        let link = self.find_by_code(code).await?;

        if link.is_deleted() {
            return Err(RepositoryError::LinkDeleted);
        }

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Link, RepositoryError> {
        self.links
            .read()
            .await
            .iter()
            .find(|l| l.short_code == code)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn record_access(
        &self,
        id: Uuid,
        accessed_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        let mut links = self.links.write().await;

        let link = links
            .iter_mut()
            .find(|l| l.id == id && !l.is_deleted())
            .ok_or(RepositoryError::NotFound)?;

        link.access_count += 1;
        link.last_access = Some(accessed_at);
        link.updated_at = Utc::now();

        Ok(())
    }

    async fn soft_delete(&self, code: &str) -> Result<(), RepositoryError> {
        let mut links = self.links.write().await;

        let link = links
            .iter_mut()
            .find(|l| l.short_code == code)
            .ok_or(RepositoryError::NotFound)?;

        if link.is_deleted() {
            return Err(RepositoryError::LinkDeleted);
        }

        let now = Utc::now();
        link.deleted_at = Some(now);
        link.updated_at = now;

        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

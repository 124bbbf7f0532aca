//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::domain::errors::RepositoryError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Persistence gateway for short links.
///
/// The shortening service depends only on this trait. Implementations own
/// their connection handling; every method is a self-contained operation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local storage
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateShortCode`] if the short code is taken
    /// by any row, deleted or not.
    async fn create(&self, new_link: NewLink) -> Result<Link, RepositoryError>;

    /// Lists every link, soft-deleted ones included, newest first.
    async fn list(&self) -> Result<Vec<Link>, RepositoryError>;

    /// Finds a link that has not been soft-deleted.
    ///
    /// # Errors
    ///
    /// - [`RepositoryError::NotFound`] if no row has this code
    /// - [`RepositoryError::LinkDeleted`] if the row exists but is soft-deleted
    async fn find_active_by_code(&self, code: &str) -> Result<Link, RepositoryError>;

    /// Finds a link by code, soft-deleted ones included.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no row has this code.
    async fn find_by_code(&self, code: &str) -> Result<Link, RepositoryError>;

    /// Increments `access_count` by one and sets `last_access`.
    ///
    /// Must be a single atomic per-row update keyed by `id` that only applies
    /// while the row is not soft-deleted. Concurrent calls must all be counted.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no live row matched.
    async fn record_access(&self, id: Uuid, accessed_at: DateTime<Utc>)
    -> Result<(), RepositoryError>;

    /// Soft-deletes a link by setting `deleted_at = now()`.
    ///
    /// # Errors
    ///
    /// - [`RepositoryError::NotFound`] if no row has this code
    /// - [`RepositoryError::LinkDeleted`] if the row was already deleted
    async fn soft_delete(&self, code: &str) -> Result<(), RepositoryError>;

    /// Checks that the backing store is reachable.
    async fn ping(&self) -> Result<(), RepositoryError>;
}

//! Short link creation, lookup, redirect bookkeeping, and deletion.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::application::context::RequestContext;
use crate::domain::entities::{Link, NewLink};
use crate::domain::errors::{RepositoryError, ShortenerError};
use crate::domain::repositories::LinkRepository;
use crate::utils::code_generator::{generate_code, new_seed};
use crate::utils::validation::{validate_short_link, validate_url};

/// Number of codes tried before giving up on a create request.
pub const MAX_CREATE_ATTEMPTS: usize = 10;

/// Link lifetime used when the request does not ask for a positive one.
pub const DEFAULT_EXPIRE_DAYS: u32 = 30;

/// Upper bound on a requested lifetime; larger values are clamped.
pub const MAX_EXPIRE_DAYS: i64 = 36_500;

/// Request to shorten a URL.
#[derive(Debug, Clone)]
pub struct CreateLink {
    pub url: String,
    /// Lifetime in days. Zero or negative selects the service default.
    pub expire_days: i64,
}

/// Outcome of a single create attempt that did not fail terminally.
enum Attempt {
    Created(Link),
    Collision(String),
}

/// Service orchestrating the short link lifecycle.
///
/// Holds no mutable state: every operation is independent, and all
/// coordination between concurrent requests is left to the repository.
pub struct ShortenerService {
    repository: Arc<dyn LinkRepository>,
    base_url: String,
    default_expire_days: u32,
}

impl ShortenerService {
    /// Creates a service publishing short links under `base_url`.
    pub fn new(repository: Arc<dyn LinkRepository>, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            base_url: base_url.into(),
            default_expire_days: DEFAULT_EXPIRE_DAYS,
        }
    }

    /// Overrides the default link lifetime.
    pub fn with_default_expire_days(mut self, days: u32) -> Self {
        self.default_expire_days = days;
        self
    }

    /// Validates `cmd.url` and stores it under a freshly generated short code.
    ///
    /// # Code Generation
    ///
    /// Each attempt derives a code from a new random seed. When the repository
    /// reports the code as taken, the attempt is logged and repeated, up to
    /// [`MAX_CREATE_ATTEMPTS`] times in total.
    ///
    /// # Errors
    ///
    /// - [`ShortenerError::BadUrl`] if the URL is invalid (storage is not touched)
    /// - [`ShortenerError::MaxRetriesReachedOnCreateLink`] if every attempt collided
    /// - [`ShortenerError::Storage`] on any other repository failure
    pub async fn create_short_link(
        &self,
        ctx: &RequestContext,
        cmd: CreateLink,
    ) -> Result<Link, ShortenerError> {
        validate_url(&cmd.url).map_err(|e| ShortenerError::BadUrl(e.to_string()))?;

        let expire_days = if cmd.expire_days <= 0 {
            i64::from(self.default_expire_days)
        } else {
            cmd.expire_days.min(MAX_EXPIRE_DAYS)
        };

        for attempt in 1..=MAX_CREATE_ATTEMPTS {
            let new_link = NewLink {
                id: Uuid::new_v4(),
                target_url: cmd.url.clone(),
                short_code: generate_code(&new_seed()),
                expire_at: Utc::now() + Duration::days(expire_days),
            };

            match self.try_create(ctx, new_link).await? {
                Attempt::Created(link) => {
                    info!(
                        request_id = %ctx.request_id,
                        code = %link.short_code,
                        attempt,
                        "Short link created"
                    );
                    return Ok(link.with_short_link(&self.base_url));
                }
                Attempt::Collision(code) => {
                    warn!(
                        request_id = %ctx.request_id,
                        code = %code,
                        attempt,
                        "Short code collision, retrying with a new seed"
                    );
                }
            }
        }

        Err(ShortenerError::MaxRetriesReachedOnCreateLink)
    }

    async fn try_create(
        &self,
        ctx: &RequestContext,
        new_link: NewLink,
    ) -> Result<Attempt, ShortenerError> {
        let code = new_link.short_code.clone();

        match ctx.run(self.repository.create(new_link)).await? {
            Ok(link) => Ok(Attempt::Created(link)),
            Err(RepositoryError::DuplicateShortCode { .. }) => Ok(Attempt::Collision(code)),
            Err(e) => Err(ShortenerError::storage("failed to create link", e)),
        }
    }

    /// Lists every link, deleted ones included, newest first.
    pub async fn get_links(&self, ctx: &RequestContext) -> Result<Vec<Link>, ShortenerError> {
        let links = ctx
            .run(self.repository.list())
            .await?
            .map_err(|e| ShortenerError::storage("failed to get links", e))?;

        Ok(links
            .into_iter()
            .map(|link| link.with_short_link(&self.base_url))
            .collect())
    }

    /// Returns a link with its access statistics.
    ///
    /// Soft-deleted links are still reported. Access counters are not touched.
    ///
    /// # Errors
    ///
    /// - [`ShortenerError::BadShortLink`] if `code` is malformed
    /// - [`ShortenerError::NotFound`] if no link has this code
    pub async fn get_link_statistics(
        &self,
        ctx: &RequestContext,
        code: &str,
    ) -> Result<Link, ShortenerError> {
        validate_short_link(code).map_err(|e| ShortenerError::BadShortLink(e.to_string()))?;

        let link = ctx
            .run(self.repository.find_by_code(code))
            .await?
            .map_err(|e| ShortenerError::storage("failed to get link by short code", e))?;

        Ok(link.with_short_link(&self.base_url))
    }

    /// Resolves `code` for a redirect and records the access.
    ///
    /// Returns the link as read before the counter was incremented, with the
    /// bare short code. The increment itself is one atomic repository update,
    /// so concurrent redirects are all counted.
    ///
    /// # Errors
    ///
    /// - [`ShortenerError::BadShortLink`] if `code` is malformed
    /// - [`ShortenerError::NotFound`] if no link has this code
    /// - [`ShortenerError::LinkDeleted`] if the link is soft-deleted
    pub async fn redirect_link(
        &self,
        ctx: &RequestContext,
        code: &str,
    ) -> Result<Link, ShortenerError> {
        validate_short_link(code).map_err(|e| ShortenerError::BadShortLink(e.to_string()))?;

        let link = ctx
            .run(self.repository.find_active_by_code(code))
            .await?
            .map_err(|e| ShortenerError::storage("failed to get link by short code", e))?;

        if link.is_deleted() {
            return Err(ShortenerError::LinkDeleted);
        }

        ctx.run(self.repository.record_access(link.id, Utc::now()))
            .await?
            .map_err(|e| ShortenerError::storage("failed to update access stats", e))?;

        debug!(request_id = %ctx.request_id, code, "Redirect recorded");

        Ok(link)
    }

    /// Soft-deletes the link with `code`.
    ///
    /// Only emptiness is checked here; any other string is handed to the
    /// repository, which answers not-found for codes that cannot exist.
    ///
    /// # Errors
    ///
    /// - [`ShortenerError::BadUrl`] if `code` is empty
    /// - [`ShortenerError::NotFound`] if no link has this code
    /// - [`ShortenerError::LinkDeleted`] if the link was already deleted
    pub async fn delete_link(&self, ctx: &RequestContext, code: &str) -> Result<(), ShortenerError> {
        if code.is_empty() {
            return Err(ShortenerError::BadUrl("short link cannot be empty".to_string()));
        }

        ctx.run(self.repository.soft_delete(code))
            .await?
            .map_err(|e| ShortenerError::storage("failed to delete link", e))?;

        info!(request_id = %ctx.request_id, code, "Short link deleted");

        Ok(())
    }

    /// Checks that the repository backend is reachable.
    pub async fn health_check(&self, ctx: &RequestContext) -> Result<(), ShortenerError> {
        ctx.run(self.repository.ping())
            .await?
            .map_err(|e| ShortenerError::storage("storage health check failed", e))
    }
}

//! Error taxonomy of the shortening core.
//!
//! [`RepositoryError`] is what persistence gateways report; [`ShortenerError`]
//! is what service operations return to the HTTP layer.

use thiserror::Error;

/// Errors reported by a [`crate::domain::repositories::LinkRepository`].
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The short code is already taken. Retried by the create loop, never
    /// surfaced to clients.
    #[error("short code already exists: {code}")]
    DuplicateShortCode { code: String },

    #[error("not found")]
    NotFound,

    #[error("link is deleted")]
    LinkDeleted,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Errors returned by [`crate::application::services::ShortenerService`].
#[derive(Debug, Error)]
pub enum ShortenerError {
    #[error("bad origin link URL: {0}")]
    BadUrl(String),

    #[error("bad short link: {0}")]
    BadShortLink(String),

    #[error("not found")]
    NotFound,

    #[error("link is deleted")]
    LinkDeleted,

    /// Every create attempt collided. The caller may retry the whole request.
    #[error("max retries reached on create link")]
    MaxRetriesReachedOnCreateLink,

    #[error("request deadline exceeded")]
    DeadlineExceeded,

    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: RepositoryError,
    },
}

impl ShortenerError {
    /// Wraps a repository error with operation context.
    ///
    /// Not-found and deleted signals keep their own variants so callers can
    /// match on them; everything else becomes [`ShortenerError::Storage`].
    pub fn storage(context: &'static str, source: RepositoryError) -> Self {
        match source {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::LinkDeleted => Self::LinkDeleted,
            source => Self::Storage { context, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keeps_not_found() {
        let err = ShortenerError::storage("failed to get link", RepositoryError::NotFound);
        assert!(matches!(err, ShortenerError::NotFound));
    }

    #[test]
    fn test_storage_keeps_link_deleted() {
        let err = ShortenerError::storage("failed to delete link", RepositoryError::LinkDeleted);
        assert!(matches!(err, ShortenerError::LinkDeleted));
    }

    #[test]
    fn test_storage_wraps_other_errors_with_context() {
        let err = ShortenerError::storage(
            "failed to get links",
            RepositoryError::Backend("connection refused".to_string()),
        );
        assert!(matches!(err, ShortenerError::Storage { .. }));
        assert_eq!(
            err.to_string(),
            "failed to get links: storage backend failure: connection refused"
        );
    }
}

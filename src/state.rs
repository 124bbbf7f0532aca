//! Application state shared across all HTTP handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::ShortenerService;
use crate::domain::repositories::LinkRepository;

/// Default per-request deadline.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared state injected into every handler.
///
/// Cloned per request; all fields are cheap `Arc`/`Copy` values.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    /// Deadline applied to each request's [`crate::application::context::RequestContext`].
    pub request_timeout: Duration,
}

impl AppState {
    /// Builds the state around an already configured service.
    pub fn new(shortener: Arc<ShortenerService>, request_timeout: Duration) -> Self {
        Self {
            shortener,
            request_timeout,
        }
    }

    /// Builds a service over `repository` with default lifetime and timeout.
    pub fn from_repository(repository: Arc<dyn LinkRepository>, base_url: &str) -> Self {
        Self::new(
            Arc::new(ShortenerService::new(repository, base_url)),
            DEFAULT_REQUEST_TIMEOUT,
        )
    }
}

//! Per-request context passed explicitly into every service operation.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use uuid::Uuid;

use crate::domain::errors::ShortenerError;

/// Identity and deadline of one inbound request.
///
/// Built by [`crate::api::middleware::request_context`] for HTTP requests and
/// by callers directly elsewhere (CLI, tests).
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    pub deadline: Option<Instant>,
}

impl RequestContext {
    /// Creates a context with a fresh request id and no deadline.
    pub fn new() -> Self {
        Self {
            request_id: new_request_id(),
            deadline: None,
        }
    }

    /// Creates a context whose deadline is `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::new().deadline_at(Instant::now() + timeout)
    }

    /// Replaces the request id.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    /// Sets the deadline.
    pub fn deadline_at(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Runs `fut` under this context's deadline.
    ///
    /// When the deadline passes first, `fut` is dropped and
    /// [`ShortenerError::DeadlineExceeded`] is returned. A dropped storage call
    /// either ran to completion or not at all.
    pub async fn run<F, T>(&self, fut: F) -> Result<T, ShortenerError>
    where
        F: Future<Output = T>,
    {
        match self.deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, fut)
                .await
                .map_err(|_| ShortenerError::DeadlineExceeded),
            None => Ok(fut.await),
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates a request id: a v4 UUID without dashes.
pub fn new_request_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_format() {
        let id = new_request_id();
        assert_eq!(id.len(), 32);
        assert!(!id.contains('-'));
    }

    #[tokio::test]
    async fn test_run_without_deadline() {
        let ctx = RequestContext::new();
        let value = ctx.run(async { 42 }).await.unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_run_within_deadline() {
        let ctx = RequestContext::with_timeout(Duration::from_secs(5));
        let value = ctx.run(async { "done" }).await.unwrap();
        assert_eq!(value, "done");
    }

    #[tokio::test]
    async fn test_run_past_deadline() {
        let ctx = RequestContext::with_timeout(Duration::from_millis(20));
        let result = ctx
            .run(tokio::time::sleep(Duration::from_secs(10)))
            .await;
        assert!(matches!(result, Err(ShortenerError::DeadlineExceeded)));
    }

    #[test]
    fn test_with_request_id() {
        let ctx = RequestContext::new().with_request_id("abc");
        assert_eq!(ctx.request_id, "abc");
        assert!(ctx.deadline.is_none());
    }
}

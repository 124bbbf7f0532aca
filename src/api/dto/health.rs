//! Health endpoint payloads.

use serde::Serialize;

/// Overall service health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub storage: StorageCheck,
}

/// Result of pinging the link storage backend.
#[derive(Debug, Serialize)]
pub struct StorageCheck {
    /// `ok` or `error`.
    pub status: &'static str,
    pub latency_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl StorageCheck {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a single URL.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be absolute HTTP/HTTPS).
    pub url: String,

    /// Lifetime in days. Missing, zero, or negative selects the default.
    #[serde(default)]
    pub expire_days: i64,
}

/// Response carrying the full short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_link: String,
}

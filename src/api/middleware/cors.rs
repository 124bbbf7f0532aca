//! Cross-origin resource sharing policy.

use std::time::Duration;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

/// How long browsers may cache a preflight response.
pub const CORS_MAX_AGE: Duration = Duration::from_secs(144_000);

/// Creates a CORS layer admitting a single origin with credentials.
///
/// # Errors
///
/// Returns an error if `allowed_origin` is not a valid header value.
pub fn layer(allowed_origin: &str) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(allowed_origin)
        .with_context(|| format!("invalid CORS origin '{allowed_origin}'"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::HEAD,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE))
}

//! Top-level router configuration.
//!
//! # Route Structure
//!
//! See [`crate::api::routes::routes`] for the endpoint list.
//!
//! # Middleware
//!
//! Outermost first:
//!
//! - **Path normalization** - Trailing slash handling
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - Panicking handlers answer 500 instead of dropping the connection
//! - **CORS** - Single allowed origin with credentials
//! - **Request context** - Request id and deadline for every request

use crate::api;
use crate::api::middleware::{cors, request_context, tracing};
use crate::state::AppState;
use anyhow::Result;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_origin` - the single origin browsers may call the API from
///
/// # Errors
///
/// Returns an error if `cors_origin` is not a valid header value.
pub fn app_router(state: AppState, cors_origin: &str) -> Result<NormalizePath<Router>> {
    let router = api_router(state, cors_origin)?;

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}

/// Routes with every middleware except path normalization, which has to wrap
/// the router from outside.
pub fn api_router(state: AppState, cors_origin: &str) -> Result<Router> {
    Ok(api::routes::routes()
        .layer(middleware::from_fn_with_state(
            state.clone(),
            request_context,
        ))
        .layer(cors::layer(cors_origin)?)
        .layer(CatchPanicLayer::new())
        .layer(tracing::layer())
        .with_state(state))
}

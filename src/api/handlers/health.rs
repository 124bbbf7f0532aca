//! Handler for health check endpoint.

use std::time::Instant;

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{HealthChecks, HealthResponse, StorageCheck};
use crate::application::context::RequestContext;
use crate::state::AppState;

/// Reports whether the link storage is reachable.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: storage reachable
/// - **503 Service Unavailable**: storage ping failed or ran past the request deadline
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "storage": { "status": "ok", "latency_ms": 1 }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> (StatusCode, Json<HealthResponse>) {
    let storage = check_storage(&state, &ctx).await;

    let (code, status) = if storage.is_ok() {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks { storage },
    };

    (code, Json(response))
}

async fn check_storage(state: &AppState, ctx: &RequestContext) -> StorageCheck {
    let started = Instant::now();
    let result = state.shortener.health_check(ctx).await;
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    match result {
        Ok(()) => StorageCheck {
            status: "ok",
            latency_ms,
            message: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Storage health check failed");
            StorageCheck {
                status: "error",
                latency_ms,
                message: Some("storage unavailable"),
            }
        }
    }
}

//! API route configuration.

use crate::api::handlers::{
    delete_empty_link_handler, delete_link_handler, health_handler, links_handler,
    redirect_handler, shorten_handler, stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// All public routes.
///
/// # Endpoints
///
/// - `POST   /shortener`     - Create a short link
/// - `GET    /shortener`     - List all links
/// - `GET    /stats/{link}`  - Statistics for one link
/// - `GET    /health`        - Storage health check
/// - `GET    /{link}`        - Redirect to the target URL
/// - `DELETE /{link}`        - Soft-delete a link
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shortener", get(links_handler).post(shorten_handler))
        .route("/stats/{link}", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/", delete(delete_empty_link_handler))
        .route(
            "/{link}",
            get(redirect_handler).delete(delete_link_handler),
        )
}

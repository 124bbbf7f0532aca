//! Handler for link statistics endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::link::LinkItem;
use crate::application::context::RequestContext;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a link with its access statistics.
///
/// # Endpoint
///
/// `GET /stats/{link}`
///
/// Deleted links are still reported, with `deleted_at` set. Reading
/// statistics never counts as an access.
///
/// # Errors
///
/// - **400 Bad Request**: malformed short code
/// - **404 Not Found**: no link with this code
pub async fn stats_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(link): Path<String>,
) -> Result<Json<LinkItem>, AppError> {
    let link = state.shortener.get_link_statistics(&ctx, &link).await?;

    Ok(Json(link.into()))
}

//! Handlers for link listing and deletion.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::link::LinkItem;
use crate::api::dto::message::MessageResponse;
use crate::application::context::RequestContext;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all links, deleted ones included, newest first.
///
/// # Endpoint
///
/// `GET /shortener`
pub async fn links_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<Json<Vec<LinkItem>>, AppError> {
    let links = state.shortener.get_links(&ctx).await?;

    Ok(Json(links.into_iter().map(LinkItem::from).collect()))
}

/// Soft-deletes a link.
///
/// # Endpoint
///
/// `DELETE /{link}`
///
/// # Response
///
/// ```json
/// { "code": 200, "message": "success" }
/// ```
///
/// # Errors
///
/// - **404 Not Found**: unknown or already deleted link
pub async fn delete_link_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(link): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.shortener.delete_link(&ctx, &link).await?;

    Ok(Json(MessageResponse::success()))
}

/// `DELETE /` with no link segment; always rejected as an empty link.
pub async fn delete_empty_link_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<Json<MessageResponse>, AppError> {
    state.shortener.delete_link(&ctx, "").await?;

    Ok(Json(MessageResponse::success()))
}

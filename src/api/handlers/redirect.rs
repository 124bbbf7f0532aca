//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::application::context::RequestContext;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{link}`
///
/// Responds `302 Found` with `Location` set to the target URL. Every
/// successful redirect increments the link's access counter and sets its
/// last access time before the response is sent.
///
/// # Errors
///
/// - **400 Bad Request**: malformed short code
/// - **404 Not Found**: unknown or deleted link
pub async fn redirect_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(link): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.shortener.redirect_link(&ctx, &link).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, link.target_url)]))
}

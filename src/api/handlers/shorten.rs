//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::application::context::RequestContext;
use crate::application::services::CreateLink;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a URL.
///
/// # Endpoint
///
/// `POST /shortener`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "expire_days": 7
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_link": "https://example.com/o6nh7Zc0"
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: malformed body, invalid URL, or code space exhausted
///   after repeated collisions (safe to retry)
pub async fn shorten_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;

    let link = state
        .shortener
        .create_short_link(
            &ctx,
            CreateLink {
                url: payload.url,
                expire_days: payload.expire_days,
            },
        )
        .await?;

    Ok(Json(ShortenResponse {
        short_link: link.short_code,
    }))
}

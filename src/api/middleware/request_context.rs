//! Per-request context injection.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderValue, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::{Instrument, info_span};

use crate::application::context::RequestContext;
use crate::state::AppState;

/// Response header echoing the request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Attaches a [`RequestContext`] to the request.
///
/// The context gets a fresh request id and a deadline of
/// [`AppState::request_timeout`] from now. Everything logged while the request
/// is handled runs inside a `request` span carrying the id, and the id is
/// returned to the client in the `x-request-id` header.
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/{link}", get(redirect_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), request_context));
/// ```
pub async fn request_context(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let ctx = RequestContext::with_timeout(state.request_timeout);
    let request_id = ctx.request_id.clone();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    req.extensions_mut().insert(ctx);

    let mut response = next.run(req).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// Extracts the context installed by [`request_context`].
///
/// Routers mounted without the middleware get a fresh context with no
/// deadline.
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_default())
    }
}

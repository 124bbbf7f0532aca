//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Trace layer type produced by [`layer`].
pub type HttpTraceLayer = TraceLayer<SharedClassifier<ServerErrorsAsFailures>>;

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// - Span at `INFO` with method, URI, and HTTP version
/// - Request start at `DEBUG`
/// - Response at `INFO` with status and latency in milliseconds
/// - 5xx responses additionally at `ERROR`
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/shortener version=HTTP/1.1}: finished processing request latency=3 ms status=200
/// ```
///
/// Sits outside [`super::request_context`], so the request id span is nested
/// inside this one.
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}

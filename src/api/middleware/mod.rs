//! HTTP middleware for request processing.
//!
//! Provides request context injection, CORS, and observability middleware.

pub mod cors;
pub mod request_context;
pub mod tracing;

pub use request_context::{REQUEST_ID_HEADER, request_context};

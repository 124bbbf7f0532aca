//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers and the admin CLI.
//!
//! # Modules
//!
//! - [`context`] - Per-request identity and deadline passed into every operation
//! - [`services::shortener_service::ShortenerService`] - Short link lifecycle

pub mod context;
pub mod services;

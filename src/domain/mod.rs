//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`errors`] - Repository and service error taxonomy
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on the presentation layer
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])
//!
//! # Link Lifecycle
//!
//! 1. Created by [`crate::application::services::ShortenerService::create_short_link`]
//! 2. Every redirect increments `access_count` and sets `last_access`
//! 3. Deletion sets `deleted_at`; the row stays for statistics
//! 4. `expire_at` is stored and reported but not enforced

pub mod entities;
pub mod errors;
pub mod repositories;

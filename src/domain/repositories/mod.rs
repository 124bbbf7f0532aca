//! Repository trait definitions for the domain layer.
//!
//! Repositories abstract data access behind traits implemented by the
//! infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Testing
//!
//! See integration tests in `tests/repository_link.rs` for usage examples.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;

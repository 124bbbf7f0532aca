//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL with its access statistics
//!
//! Creation goes through a separate command struct, [`NewLink`], holding only
//! the fields the caller decides; timestamps and counters are assigned by storage.

pub mod link;

pub use link::{Link, NewLink};

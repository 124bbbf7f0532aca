//! Utility functions for code generation, input validation, and database errors.
//!
//! - [`code_generator`] - Short code derivation from random seeds
//! - [`validation`] - Target URL and short code validation
//! - [`db_error`] - PostgreSQL error classification

pub mod code_generator;
pub mod db_error;
pub mod validation;

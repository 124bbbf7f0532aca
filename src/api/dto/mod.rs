//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Input checks live
//! in the service layer, so request DTOs carry raw values.

pub mod health;
pub mod link;
pub mod message;
pub mod shorten;

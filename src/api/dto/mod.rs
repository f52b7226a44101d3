//! Data Transfer Objects for API requests and responses.
//!
//! Query types use Serde for deserialization and validator for input checks.

pub mod health;
pub mod pageviews;

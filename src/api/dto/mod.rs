//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization and validator for input checks.

pub mod health;
pub mod records;
pub mod shorten;

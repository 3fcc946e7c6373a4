//! Domain layer containing business entities and store contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on infrastructure or presentation
//! concerns; repository traits define contracts implemented by the
//! infrastructure layer.

pub mod entities;
pub mod repositories;

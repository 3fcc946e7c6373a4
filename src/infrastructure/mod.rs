//! Infrastructure layer for external integrations.
//!
//! Implements the repository contracts defined by the domain layer.

pub mod persistence;

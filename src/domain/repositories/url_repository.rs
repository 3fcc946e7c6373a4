//! Repository trait for short URL record access.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Record store interface for URL records.
///
/// All operations are potentially-blocking I/O; callers propagate
/// cancellation from the request context down to the store call.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record with `clicks = 0`.
    ///
    /// The insert is atomic and fails on a duplicate `short_code` rather than
    /// overwriting; this is the sole uniqueness guarantee in the system.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists,
    /// [`AppError::Internal`] on database errors.
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds a record by its exact short code, across all owners.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record by its long URL and owner.
    ///
    /// `owner_id = None` matches only anonymous records. Used for the
    /// advisory dedup check on create; never relied on for uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_long_url(
        &self,
        long_url: &str,
        owner_id: Option<String>,
    ) -> Result<Option<UrlRecord>, AppError>;

    /// Atomically increments the click counter of a record and returns it.
    ///
    /// The increment is a single store-native operation, never fetch-then-write,
    /// so concurrent resolves compose without lost updates.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if no record matches the code; the store is left unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_clicks(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Lists all records of an owner, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<UrlRecord>, AppError>;
}

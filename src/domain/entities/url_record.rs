//! URL record entity, the mapping between a short code and a long URL.

use chrono::{DateTime, Utc};

/// A stored short-link record.
///
/// `short_code` is unique across the entire record set for the lifetime of
/// the system; codes are never recycled. `clicks` is the only mutable field
/// and only ever grows, one increment per successful resolve.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    /// Opaque identifier of the creating principal; `None` for anonymous records.
    pub owner_id: Option<String>,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new record instance.
    pub fn new(
        id: i64,
        short_code: String,
        long_url: String,
        owner_id: Option<String>,
        clicks: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_code,
            long_url,
            owner_id,
            clicks,
            created_at,
        }
    }

    /// Returns true if the record was created without an authenticated owner.
    pub fn is_anonymous(&self) -> bool {
        self.owner_id.is_none()
    }
}

/// Input data for creating a new record.
///
/// `clicks` and `created_at` are assigned by the store at insert time.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub short_code: String,
    pub long_url: String,
    pub owner_id: Option<String>,
}

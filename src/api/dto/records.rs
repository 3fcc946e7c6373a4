//! DTO for URL record listings.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlRecord;

/// Serialized view of a stored record, as returned by the listing endpoint.
#[derive(Debug, Serialize)]
pub struct UrlRecordDto {
    #[serde(rename = "shortCode")]
    pub short_code: String,
    #[serde(rename = "longURL")]
    pub long_url: String,
    #[serde(rename = "ownerId", skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    pub clicks: i64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<UrlRecord> for UrlRecordDto {
    fn from(record: UrlRecord) -> Self {
        Self {
            short_code: record.short_code,
            long_url: record.long_url,
            owner_id: record.owner_id,
            clicks: record.clicks,
            created_at: record.created_at,
        }
    }
}

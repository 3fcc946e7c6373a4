//! DTOs for the link shortening endpoint.
//!
//! Field names follow the service's established wire contract (camelCase).

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The redirect target. Only checked for non-emptiness.
    #[serde(rename = "longURL")]
    #[validate(length(min = 1, message = "longURL is required"))]
    pub long_url: String,

    /// Optional caller-chosen short code; shares one namespace with
    /// generated codes.
    #[serde(rename = "customCode")]
    pub custom_code: Option<String>,

    /// Opaque identifier of the authenticated caller, already verified by
    /// the identity provider. Absent for anonymous requests.
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// Response carrying the allocated short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    #[serde(rename = "shortURL")]
    pub short_url: String,
    pub code: String,
}

//! Short code generation and validation.
//!
//! Random codes are drawn from a URL-safe 64-symbol alphabet with a
//! cryptographically secure source. The generator never checks the store
//! for collisions; uniqueness is enforced by the database constraint and
//! the allocator's insert-retry loop.

use crate::error::AppError;
use serde_json::json;

/// Length of generated short codes.
///
/// Six symbols over a 64-character alphabet give ~6.9e10 possible codes,
/// ample headroom against collisions at expected volumes.
pub const CODE_LENGTH: usize = 6;

/// Maximum length accepted for caller-chosen custom codes.
const CUSTOM_CODE_MAX_LENGTH: usize = 64;

/// URL-safe alphabet for generated codes. 64 symbols, so a random byte
/// reduced mod 64 is unbiased.
const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Codes reserved for service routes; accepting them as short codes would
/// shadow the corresponding endpoints.
const RESERVED_CODES: &[&str] = &["shorten", "all", "health"];

/// Generates a random 6-character short code.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    buffer
        .iter()
        .map(|&b| ALPHABET[b as usize % ALPHABET.len()] as char)
        .collect()
}

/// Validates a caller-chosen custom short code.
///
/// Custom codes share one global namespace with generated codes; this check
/// only constrains their shape so they are routable: non-empty, at most 64
/// characters, URL-safe alphabet, not a reserved route word.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > CUSTOM_CODE_MAX_LENGTH {
        return Err(AppError::bad_request(
            "Custom code must be 1-64 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Custom code can only contain letters, digits, hyphens, and underscores",
            json!({ "code": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}

//! Short link allocation, resolution, and listing.

use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use serde_json::json;

/// Result of an allocation request.
///
/// `is_new` is `false` when the advisory dedup check returned an already
/// existing record instead of creating one.
#[derive(Debug, Clone)]
pub struct ShortenOutcome {
    pub record: UrlRecord,
    pub is_new: bool,
}

/// Service for allocating, resolving, and listing short links.
///
/// Uniqueness of short codes rests entirely on the store's constraint plus
/// the insert-retry loop in [`Self::allocate`]; every pre-insert lookup in
/// this service is an optimization, not a correctness mechanism.
pub struct LinkService {
    repository: Arc<dyn UrlRepository>,
}

impl LinkService {
    /// Maximum insert attempts for generated codes before giving up.
    const MAX_GENERATION_ATTEMPTS: usize = 5;

    /// Creates a new link service.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Allocates a short code for `long_url`.
    ///
    /// # Policy
    ///
    /// - With `custom_code`: the code is validated for shape and used
    ///   verbatim. Custom codes live in one namespace shared by all owners
    ///   and generated codes; a taken code is a conflict regardless of who
    ///   owns it or what URL it points to.
    /// - Without `custom_code`: if the same `(long_url, owner_id)` pair was
    ///   already shortened, the existing record is returned with
    ///   `is_new = false` (best effort; two records for the same pair can
    ///   coexist if created concurrently). Otherwise a random 6-character
    ///   code is inserted directly, retrying on the store's
    ///   unique-violation signal.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty URL or malformed custom
    /// code, [`AppError::Conflict`] if the custom code is taken, and
    /// [`AppError::Exhausted`] if the generation retry budget runs out.
    pub async fn allocate(
        &self,
        long_url: String,
        custom_code: Option<String>,
        owner_id: Option<String>,
    ) -> Result<ShortenOutcome, AppError> {
        let long_url = long_url.trim().to_string();
        if long_url.is_empty() {
            return Err(AppError::bad_request("longURL is required", json!({})));
        }

        if let Some(custom) = custom_code {
            validate_custom_code(&custom)?;

            // Advisory pre-check for a friendlier error; the insert below is
            // what actually guarantees uniqueness under concurrency.
            if self.repository.find_by_code(&custom).await?.is_some() {
                return Err(AppError::conflict(
                    "Custom code already taken",
                    json!({ "code": custom }),
                ));
            }

            let record = self
                .repository
                .create(NewUrlRecord {
                    short_code: custom,
                    long_url,
                    owner_id,
                })
                .await?;

            return Ok(ShortenOutcome {
                record,
                is_new: true,
            });
        }

        if let Some(existing) = self
            .repository
            .find_by_long_url(&long_url, owner_id.clone())
            .await?
        {
            return Ok(ShortenOutcome {
                record: existing,
                is_new: false,
            });
        }

        // Generate then attempt the insert; a unique violation means another
        // writer took the code, so regenerate. Never check-then-insert.
        for _ in 0..Self::MAX_GENERATION_ATTEMPTS {
            let code = generate_code();

            match self
                .repository
                .create(NewUrlRecord {
                    short_code: code,
                    long_url: long_url.clone(),
                    owner_id: owner_id.clone(),
                })
                .await
            {
                Ok(record) => {
                    return Ok(ShortenOutcome {
                        record,
                        is_new: true,
                    });
                }
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::exhausted(
            "Failed to allocate a unique short code",
            json!({ "attempts": Self::MAX_GENERATION_ATTEMPTS }),
        ))
    }

    /// Resolves a short code to its long URL, counting one access.
    ///
    /// The lookup and the counter update are a single atomic store operation,
    /// so concurrent resolves each contribute exactly one increment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown; the store is
    /// left unmodified in that case.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        self.repository
            .increment_clicks(code)
            .await?
            .map(|record| record.long_url)
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "code": code }))
            })
    }

    /// Lists an owner's records, most recently created first.
    pub async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<UrlRecord>, AppError> {
        self.repository.list_by_owner(owner_id).await
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }

    /// Probes the record store with a cheap read.
    ///
    /// "health" is a reserved code, so the lookup always misses; only a
    /// store failure surfaces here.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.find_by_code("health").await.map(|_| ())
    }
}

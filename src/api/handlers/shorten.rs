//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "longURL": "https://example.com",
///   "customCode": "promo",   // optional
///   "userId": "user1"        // optional, injected by the identity provider
/// }
/// ```
///
/// # Response
///
/// - **201 Created** with `{shortURL, code}` when a new record was allocated
/// - **200 OK** with the existing link when the URL was already shortened
///   for this caller (dedup hit)
///
/// # Errors
///
/// - **400 Bad Request**: empty `longURL` or malformed custom code
/// - **409 Conflict**: custom code already taken
/// - **500**: generation retry budget exceeded, or store failure
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let outcome = state
        .link_service
        .allocate(payload.long_url, payload.custom_code, payload.user_id)
        .await?;

    let status = if outcome.is_new {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    let short_url = state
        .link_service
        .short_url(&state.base_url, &outcome.record.short_code);

    Ok((
        status,
        Json(ShortenResponse {
            short_url,
            code: outcome.record.short_code,
        }),
    ))
}

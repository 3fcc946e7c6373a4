//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL, counting one access.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The lookup and the click increment are one atomic store operation; every
/// request reads through to the store so the counter has a single source of
/// truth.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist. The store is left
/// unmodified in that case.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.link_service.resolve(&code).await?;

    debug!(%code, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]))
}

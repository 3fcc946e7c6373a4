//! Handler for owner link listings.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::records::UrlRecordDto;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all links created by an owner, most recent first.
///
/// # Endpoint
///
/// `GET /all/{user_id}`
///
/// The `user_id` is an opaque identifier already validated by the identity
/// provider; this service never verifies it. An owner with no links gets an
/// empty array, not a 404.
pub async fn list_handler(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlRecordDto>>, AppError> {
    let records = state.link_service.list_for_owner(&user_id).await?;

    Ok(Json(records.into_iter().map(UrlRecordDto::from).collect()))
}

//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`        - Create a short link
//! - `GET  /all/{user_id}`  - List an owner's links, newest first
//! - `GET  /health`         - Health check
//! - `GET  /{code}`         - Short link redirect
//!
//! The literal routes register before the `/{code}` capture; the reserved
//! code list in [`crate::utils::code_generator`] keeps custom codes from
//! shadowing them.

use crate::api::handlers::{health_handler, list_handler, redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/all/{user_id}", get(list_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

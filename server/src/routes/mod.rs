//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site is one server-rendered page at `/` plus its static assets
//! (stylesheet and the `page` WASM bundle) under `/static`. Everything else
//! is a small operational surface.

pub mod pages;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(pages::index))
        .route("/api/refresh", post(pages::refresh))
        .route("/healthz", get(healthz))
        .nest_service("/static", static_files)
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

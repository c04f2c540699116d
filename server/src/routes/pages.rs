//! Page handlers.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::Html;

use crate::render::RenderError;
use crate::services::catalog::CatalogError;
use crate::state::AppState;

/// `GET /` — render the index page from the current page data.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let data = state.data.read().await;
    state.renderer.index(&data).map(Html).map_err(render_error_to_status)
}

/// `POST /api/refresh` — re-gather page data from GitHub.
///
/// Requires `Authorization: Bearer {REFRESH_TOKEN}`. Without a configured
/// token the route does not exist.
pub async fn refresh(State(state): State<AppState>, headers: HeaderMap) -> StatusCode {
    let Some(expected) = state.config.refresh_token.as_deref() else {
        return StatusCode::NOT_FOUND;
    };
    if bearer_token(&headers) != Some(expected) {
        tracing::warn!("refresh rejected: bad or missing bearer token");
        return StatusCode::UNAUTHORIZED;
    }

    match state.refresh().await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(e) => catalog_error_to_status(e),
    }
}

pub(crate) fn render_error_to_status(err: RenderError) -> StatusCode {
    tracing::error!(error = %err, "failed to render page");
    StatusCode::INTERNAL_SERVER_ERROR
}

pub(crate) fn catalog_error_to_status(err: CatalogError) -> StatusCode {
    tracing::error!(error = %err, "failed to refresh page data");
    match err {
        CatalogError::ProjectsFile { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        CatalogError::Unavailable { .. } => StatusCode::BAD_GATEWAY,
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::AUTHORIZATION)?.to_str().ok()?.strip_prefix("Bearer ")
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;

//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short key to its combined URL.
///
/// # Endpoint
///
/// `GET /short/{key}`
///
/// Every lookup goes straight to the store; there is no cache.
///
/// # Errors
///
/// Returns 404 Not Found if the key doesn't exist.
pub async fn redirect_handler(
    Path(short_key): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.get_link_by_key(&short_key).await?;

    debug!(short_key = %link.short_key, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, link.long_url)]))
}

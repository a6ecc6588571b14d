//! Handler for the link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short link for a URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "custom_suffix": "docs" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_key": "3f1b2a",
///   "short_url": "http://localhost:3000/short/3f1b2a",
///   "long_url": "https://example.com/docs"
/// }
/// ```
///
/// Submitting the same URL and suffix again returns the same key.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is empty.
/// Returns 500 if no free key could be found, 503 if storage is unreachable.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .shorten(&payload.url, payload.custom_suffix.as_deref())
        .await?;

    let short_url = state
        .link_service
        .get_short_url(&state.base_url, &link.short_key);

    Ok(Json(ShortenResponse {
        short_key: link.short_key,
        short_url,
        long_url: link.long_url,
    }))
}

//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// The URL is not checked for validity beyond being non-empty; any string is
/// accepted as a redirect target.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, max = 8192, message = "URL must be 1-8192 characters"))]
    pub url: String,

    /// Optional path segment joined onto `url` before hashing.
    #[validate(length(max = 2048))]
    #[serde(default)]
    pub custom_suffix: Option<String>,
}

/// Result of a successful shortening.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_key: String,
    pub short_url: String,
    /// The combined URL the key resolves to.
    pub long_url: String,
}

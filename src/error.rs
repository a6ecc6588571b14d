//! Application error type shared by the store, the service and the HTTP layer.
//!
//! Every variant carries a human-readable `message` and a JSON `details` value.
//! The HTTP layer renders them with a common envelope:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Short link not found", "details": {} } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload returned to API clients.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Caller supplied unusable input, e.g. an empty long URL.
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// A short key is already taken.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// The collision retry budget ran out before a free key was found.
    #[error("{message}")]
    KeyspaceExhausted { message: String, details: Value },

    /// The backing store could not be reached (pool timeout, closed pool, IO).
    #[error("{message}")]
    StorageUnavailable { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn keyspace_exhausted(message: impl Into<String>, details: Value) -> Self {
        Self::KeyspaceExhausted {
            message: message.into(),
            details,
        }
    }
    pub fn storage_unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::StorageUnavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status and machine-readable code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Conflict { .. } => (StatusCode::CONFLICT, "conflict"),
            AppError::KeyspaceExhausted { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "keyspace_exhausted")
            }
            AppError::StorageUnavailable { .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, "storage_unavailable")
            }
            AppError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    /// Converts the error into its serializable form.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code) = self.status_and_code();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Conflict { message, details }
            | AppError::KeyspaceExhausted { message, details }
            | AppError::StorageUnavailable { message, details }
            | AppError::Internal { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Request validation failed",
            serde_json::to_value(&e).unwrap_or_else(|_| json!({})),
        )
    }
}

/// Classifies a database error.
///
/// Unique violations become [`AppError::Conflict`], connectivity problems become
/// [`AppError::StorageUnavailable`], everything else is [`AppError::Internal`].
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::conflict(
            "Unique constraint violation",
            json!({ "constraint": db.constraint() }),
        );
    }

    let reason = e.to_string();

    match e {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => {
            AppError::storage_unavailable("Storage unavailable", json!({ "reason": reason }))
        }
        _ => AppError::internal("Database error", json!({})),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::bad_request("x", json!({})), 400),
            (AppError::not_found("x", json!({})), 404),
            (AppError::conflict("x", json!({})), 409),
            (AppError::keyspace_exhausted("x", json!({})), 500),
            (AppError::storage_unavailable("x", json!({})), 503),
            (AppError::internal("x", json!({})), 500),
        ];

        for (err, expected) in cases {
            assert_eq!(err.status_and_code().0.as_u16(), expected);
        }
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::not_found("Short link not found", json!({ "short_key": "abc" }));
        assert_eq!(err.to_string(), "Short link not found");
    }

    #[test]
    fn test_error_info() {
        let info = AppError::bad_request("Long URL must not be empty", json!({ "field": "url" }))
            .to_error_info();

        assert_eq!(info.code, "validation_error");
        assert_eq!(info.message, "Long URL must not be empty");
        assert_eq!(info.details["field"], "url");
    }

    #[test]
    fn test_pool_errors_are_unavailable() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            AppError::StorageUnavailable { .. }
        ));
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolClosed),
            AppError::StorageUnavailable { .. }
        ));
    }

    #[test]
    fn test_other_errors_are_internal() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            AppError::Internal { .. }
        ));
    }
}

//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kurnik_storage::StorageError;
use thiserror::Error;

/// Errors that can occur in the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was malformed (bad body, non-numeric id, empty name).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// No record matched the requested id.
    #[error("not found: {0}")]
    NotFound(String),

    /// The storage backend failed.
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Plain-text bodies; the status code is the whole contract.
        (status, self.to_string()).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(id) => Self::NotFound(format!("kogut {id}")),
            other => {
                tracing::error!(error = %other, "storage operation failed");
                Self::Internal(other.to_string())
            }
        }
    }
}

//! # Directory Errors
//!
//! Error taxonomy of the airport directory and its mapping onto HTTP
//! responses. Every error renders as `{"error": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Airport directory errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    // ==================
    // Not found
    // ==================
    /// A list query produced an empty page
    #[error("Airports not found")]
    ListEmpty,

    /// No airport with the requested code
    #[error("Airport not found")]
    AirportNotFound,

    /// Update addressed an unknown code
    #[error("Not found")]
    UpdateTargetNotFound,

    // ==================
    // Client errors
    // ==================
    /// Missing required field, unparseable body, or (legacy) delete of an
    /// unknown code
    #[error("Bad request")]
    BadRequest,

    /// Another airport already uses this code
    #[error("Conflict - an airport with that icao already exists")]
    Conflict,

    // ==================
    // Server errors
    // ==================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DirectoryError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DirectoryError::ListEmpty
            | DirectoryError::AirportNotFound
            | DirectoryError::UpdateTargetNotFound => StatusCode::NOT_FOUND,
            DirectoryError::BadRequest => StatusCode::BAD_REQUEST,
            DirectoryError::Conflict => StatusCode::CONFLICT,
            DirectoryError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub(crate) fn lock_poisoned() -> Self {
        DirectoryError::Internal("Lock poisoned".to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&DirectoryError> for ErrorResponse {
    fn from(err: &DirectoryError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}

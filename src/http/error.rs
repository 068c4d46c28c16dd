//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::db::repository::RepositoryError;

/// Application error type for HTTP handlers.
///
/// Error responses are plain text containing just the message. For a missing
/// post that text is the exact not-found message produced by the service
/// layer; clients rely on it verbatim.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found (404)
    NotFound(String),
    /// Any other failure (500)
    Unexpected(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Unexpected(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, message).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        if err.is_not_found() {
            // The bare message, without the variant prefix or error context.
            AppError::NotFound(err.message().to_string())
        } else {
            AppError::Unexpected(err.to_string())
        }
    }
}

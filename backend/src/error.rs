//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! Failures carry a JSON `{"error": ...}` body, except not-found which is empty.

use crate::phonebook::{ContactError, StoreError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Contact input failed validation
    #[error("{0}")]
    Validation(#[from] ContactError),

    /// Path identifier is not a valid contact id
    #[error("malformatted id")]
    MalformedId(String),

    /// Request body could not be decoded
    #[error("{0}")]
    BadRequest(String),

    /// No contact with the requested id
    #[error("Not found")]
    NotFound,

    /// Request body exceeded the size limit
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Storage backend failure
    #[error("{0}")]
    Store(StoreError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateName(_) => AppError::Validation(ContactError::NameNotUnique),
            other => AppError::Store(other),
        }
    }
}

impl AppError {
    /// HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::MalformedId(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Store(StoreError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::NotFound => status.into_response(),
            AppError::MalformedId(ref id) => {
                tracing::debug!("Rejected malformed id: {}", id);
                (status, Json(json!({ "error": self.to_string() }))).into_response()
            }
            AppError::Store(_) => {
                tracing::error!("{}", self);
                (status, Json(json!({ "error": self.to_string() }))).into_response()
            }
            _ => (status, Json(json!({ "error": self.to_string() }))).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_maps_to_validation() {
        let err = AppError::from(StoreError::DuplicateName("Arto Hellas".to_string()));
        assert!(matches!(
            err,
            AppError::Validation(ContactError::NameNotUnique)
        ));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "name must be unique");
    }

    #[test]
    fn test_store_errors_map_to_server_statuses() {
        let unavailable = AppError::from(StoreError::Unavailable("pool timed out".to_string()));
        assert_eq!(unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);

        let backend = AppError::from(StoreError::Backend("disk I/O error".to_string()));
        assert_eq!(backend.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_has_empty_body() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get("content-type").is_none());
    }

    #[test]
    fn test_payload_too_large_status() {
        let response = AppError::PayloadTooLarge("Failed to buffer the request body".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_malformed_id_message() {
        let err = AppError::MalformedId("abc".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "malformatted id");
    }
}

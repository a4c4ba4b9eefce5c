//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::db::repository::RepositoryError;
use crate::services::ServiceError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Always `false`
    pub success: bool,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Invalid request (validation error)
    BadRequest(String),
    /// Internal server error
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::NotFound(msg) | AppError::BadRequest(msg) => {
                warn!(%status, "{}", msg);
                msg
            }
            AppError::Internal(msg) => {
                error!(%status, "{}", msg);
                msg
            }
        };

        (status, Json(ApiError::new(message))).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        if err.is_not_found() {
            AppError::NotFound(err.message().to_string())
        } else {
            error!("Repository failure: {}", err);
            AppError::Internal(format!("Error reading data: {}", err.message()))
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => AppError::NotFound(msg),
            ServiceError::InvalidArgument(msg) => AppError::BadRequest(msg),
            ServiceError::Repository(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_errors_map_to_status() {
        let cases = [
            (ServiceError::not_found("gone"), StatusCode::NOT_FOUND),
            (ServiceError::invalid_argument("bad"), StatusCode::BAD_REQUEST),
            (
                ServiceError::Repository(RepositoryError::not_found("Restaurant not found")),
                StatusCode::NOT_FOUND,
            ),
            (
                ServiceError::Repository(RepositoryError::validation("Malformed orders.json")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).status(), status);
        }
    }

    #[test]
    fn test_not_found_keeps_plain_message() {
        match AppError::from(RepositoryError::not_found("Restaurant not found")) {
            AppError::NotFound(msg) => assert_eq!(msg, "Restaurant not found"),
            other => panic!("unexpected {:?}", other),
        }
    }
}

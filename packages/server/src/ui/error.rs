//! Mapping from application errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{infrastructure::dto::http::ErrorResponseDto, usecase::ApplicationError};

/// Error returned by HTTP handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Raised by the mediator or a handler
    Application(ApplicationError),
    /// Requested resource does not exist (read path)
    NotFound(String),
    /// A command produced an output of an unexpected shape
    Internal(String),
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        ApiError::Application(error)
    }
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::Application(error) if error.is_client_error() => {
                tracing::warn!(code = error.code(), "Request rejected: {}", error);
                (StatusCode::BAD_REQUEST, error.to_string())
            }
            ApiError::Application(error) => {
                tracing::error!(code = error.code(), "Request failed: {}", error);
                (StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
            }
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message.clone()),
            ApiError::Internal(message) => {
                tracing::error!("Request failed: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message.clone())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_message();
        (status, Json(ErrorResponseDto { error })).into_response()
    }
}

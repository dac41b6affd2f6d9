use crate::exception::http::error_response;
use crate::validation::ValidationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DemoError>;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Dependency not found: {type_name}")]
    DependencyNotFound { type_name: String },

    #[error("Failed to downcast type: {type_name}")]
    DowncastFailed { type_name: String },

    #[error("Invalid configuration for {key}: {message}")]
    Config { key: String, message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DemoError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DemoError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DemoError {
    fn into_response(self) -> Response {
        match self {
            DemoError::Validation(errors) => {
                tracing::debug!(errors = errors.len(), "request rejected by validation");
                (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response()
            }
            other => {
                tracing::error!(error = %other, "request failed");
                error_response(other.status_code(), other.to_string())
            }
        }
    }
}

use crate::error::DemoError;
use crate::exception::ExceptionFilter;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::error::Error;

/// Build the JSON body used for every non-validation error
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "statusCode": status.as_u16(),
            "message": message.into(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
        .into_response()
}

/// Default exception filter
///
/// Crate errors keep their own status mapping; anything else is a 500.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpExceptionFilter;

impl ExceptionFilter for HttpExceptionFilter {
    fn catch(&self, error: Box<dyn Error + Send + Sync>) -> Response {
        match error.downcast::<DemoError>() {
            Ok(demo_error) => (*demo_error).into_response(),
            Err(other) => {
                tracing::error!(error = %other, "unhandled error intercepted");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON response body with an explicit status
///
/// # Example
/// ```
/// use demo_api::common::{ApiResponse, Message};
///
/// async fn hello() -> ApiResponse<Message<&'static str>> {
///     ApiResponse::ok(Message::new("Hello World"))
/// }
/// ```
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub body: T,
    pub status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK
    pub fn ok(body: T) -> Self {
        Self::with_status(StatusCode::OK, body)
    }

    /// 201 Created
    pub fn created(body: T) -> Self {
        Self::with_status(StatusCode::CREATED, body)
    }

    pub fn with_status(status: StatusCode, body: T) -> Self {
        Self { body, status }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// `{"message": ...}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message<T> {
    pub message: T,
}

impl<T> Message<T> {
    pub fn new(message: T) -> Self {
        Self { message }
    }
}

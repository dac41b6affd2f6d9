use crate::interceptor::{Interceptor, InterceptorResult, Next};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request},
};
use std::time::Instant;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Logs request timing and status and tags the response with a request id
#[derive(Clone, Default)]
pub struct LoggingInterceptor;

#[async_trait]
impl Interceptor for LoggingInterceptor {
    async fn intercept(&self, request: Request<Body>, next: Next) -> InterceptorResult {
        let method = request.method().clone();
        let uri = request.uri().clone();
        let request_id = Uuid::new_v4();
        let start = Instant::now();

        tracing::info!(%request_id, "--> {} {}", method, uri);

        match next.run(request).await {
            Ok(mut response) => {
                let duration = start.elapsed();
                let status = response.status();
                tracing::info!(%request_id, "<-- {} {} {} {:?}", method, uri, status, duration);
                if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
                    response
                        .headers_mut()
                        .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
                }
                Ok(response)
            }
            Err(e) => {
                let duration = start.elapsed();
                tracing::warn!(%request_id, "<-- {} {} ERROR: {} {:?}", method, uri, e, duration);
                Err(e)
            }
        }
    }
}

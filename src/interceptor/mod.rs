use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response};
use std::future::Future;
use std::pin::Pin;

pub mod layer;
pub mod logging;

pub use layer::{InterceptorLayer, InterceptorMiddleware};
pub use logging::LoggingInterceptor;

/// standard return type for Interceptors
pub type InterceptorResult = Result<Response, InterceptorError>;

/// A type-erased error for interceptors
pub type InterceptorError = Box<dyn std::error::Error + Send + Sync>;

/// The future produced by one step of the chain
pub type NextFuture = Pin<Box<dyn Future<Output = InterceptorResult> + Send>>;

type BoxedRun = Box<dyn FnOnce(Request<Body>) -> NextFuture + Send>;

/// Represents the next handler in the chain
pub struct Next {
    run: BoxedRun,
}

impl Next {
    /// Create a new Next handler
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(Request<Body>) -> NextFuture + Send + 'static,
    {
        Self { run: Box::new(f) }
    }

    /// Execute the next handler
    pub async fn run(self, request: Request<Body>) -> InterceptorResult {
        (self.run)(request).await
    }
}

/// The Interceptor trait
///
/// Interceptors can inspect/modify the request before it reaches the handler,
/// and inspect/modify the response after the handler returns. An error
/// returned from an interceptor is turned into a response by the layer's
/// [`ExceptionFilter`](crate::exception::ExceptionFilter).
///
/// # Example
/// ```rust,ignore
/// struct TimingInterceptor;
///
/// #[async_trait]
/// impl Interceptor for TimingInterceptor {
///     async fn intercept(&self, req: Request<Body>, next: Next) -> InterceptorResult {
///         let start = std::time::Instant::now();
///         let res = next.run(req).await?;
///         tracing::debug!(elapsed = ?start.elapsed());
///         Ok(res)
///     }
/// }
/// ```
#[async_trait]
pub trait Interceptor: Send + Sync + 'static {
    async fn intercept(&self, request: Request<Body>, next: Next) -> InterceptorResult;
}

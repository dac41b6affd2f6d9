use crate::exception::ExceptionFilter;
use crate::interceptor::{Interceptor, Next, NextFuture};
use axum::{body::Body, http::Request, response::Response};
use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Tower Layer running a chain of interceptors around the inner service
#[derive(Clone)]
pub struct InterceptorLayer {
    interceptors: Arc<Vec<Box<dyn Interceptor>>>,
    filter: Arc<dyn ExceptionFilter>,
}

impl InterceptorLayer {
    pub fn new(interceptors: Vec<Box<dyn Interceptor>>, filter: impl ExceptionFilter) -> Self {
        Self {
            interceptors: Arc::new(interceptors),
            filter: Arc::new(filter),
        }
    }
}

impl<S> Layer<S> for InterceptorLayer {
    type Service = InterceptorMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        InterceptorMiddleware {
            inner,
            interceptors: Arc::clone(&self.interceptors),
            filter: Arc::clone(&self.filter),
        }
    }
}

#[derive(Clone)]
pub struct InterceptorMiddleware<S> {
    inner: S,
    interceptors: Arc<Vec<Box<dyn Interceptor>>>,
    filter: Arc<dyn ExceptionFilter>,
}

impl<S> Service<Request<Body>> for InterceptorMiddleware<S>
where
    S: Service<Request<Body>, Response = Response, Error = Infallible> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Infallible>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let interceptors = Arc::clone(&self.interceptors);
        let filter = Arc::clone(&self.filter);
        // The clone is not ready; swap so the ready service is the one called.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            let mut chain = Next::new(move |req: Request<Body>| -> NextFuture {
                Box::pin(async move {
                    match inner.call(req).await {
                        Ok(response) => Ok(response),
                        Err(never) => match never {},
                    }
                })
            });

            // interceptors[0] wraps (interceptors[1] wraps ... (inner))
            for index in (0..interceptors.len()).rev() {
                let interceptors = Arc::clone(&interceptors);
                let next = chain;
                chain = Next::new(move |req: Request<Body>| -> NextFuture {
                    Box::pin(async move { interceptors[index].intercept(req, next).await })
                });
            }

            match chain.run(request).await {
                Ok(response) => Ok(response),
                Err(error) => Ok(filter.catch(error)),
            }
        })
    }
}

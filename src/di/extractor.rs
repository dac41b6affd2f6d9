use crate::di::Container;
use crate::error::DemoError;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::sync::Arc;

/// Axum extractor for dependency injection
///
/// Resolves a registered provider straight into a handler parameter.
///
/// # Example
/// ```rust,ignore
/// async fn add_sheet(
///     Inject(service): Inject<SheetService>,
///     ValidatedJson(sheet): ValidatedJson<IdSheet>,
/// ) -> Result<ApiResponse<Message<String>>> {
///     let elapsed = service.write(&sheet).await?;
///     Ok(ApiResponse::created(Message::new(format!("elapsed time: {}s", elapsed.as_secs_f64()))))
/// }
/// ```
pub struct Inject<T>(pub Arc<T>);

/// Trait that the router state must implement to provide the DI container
pub trait HasContainer {
    fn get_container(&self) -> &Container;
}

impl<S, T> FromRequestParts<S> for Inject<T>
where
    S: Send + Sync + HasContainer,
    T: 'static + Send + Sync,
{
    type Rejection = DemoError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        state.get_container().resolve::<T>().map(Inject)
    }
}

impl<T> std::ops::Deref for Inject<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> Clone for Inject<T> {
    fn clone(&self) -> Self {
        Inject(Arc::clone(&self.0))
    }
}

use crate::di::HasContainer;
use axum::Router;

/// A group of routes served together
///
/// Controllers declare absolute paths and are merged into the application
/// router by [`AppModule::router`](crate::app_module::AppModule::router).
pub trait Controller {
    fn routes<S>() -> Router<S>
    where
        S: HasContainer + Clone + Send + Sync + 'static;
}

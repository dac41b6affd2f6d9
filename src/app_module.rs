use crate::config::ServerConfig;
use crate::controller::Controller;
use crate::di::{Container, HasContainer};
use crate::error::Result;
use crate::exception::http::HttpExceptionFilter;
use crate::interceptor::{InterceptorLayer, LoggingInterceptor};
use crate::module::Module;
use crate::modules::arithmetic::ArithmeticController;
use crate::modules::greeting::GreetingController;
use crate::modules::sheets::{SheetsController, SheetsModule};
use crate::modules::users::UsersController;
use axum::Router;
use std::sync::Arc;

/// Root application module
///
/// Registers every feature module's providers and merges the controllers.
pub struct AppModule;

impl Module for AppModule {
    fn register(container: &mut Container) -> Result<()> {
        SheetsModule::register(container)
    }
}

impl AppModule {
    pub fn router<S>() -> Router<S>
    where
        S: HasContainer + Clone + Send + Sync + 'static,
    {
        Router::new()
            .merge(GreetingController::routes())
            .merge(ArithmeticController::routes())
            .merge(UsersController::routes())
            .merge(SheetsController::routes())
    }
}

#[derive(Clone)]
pub struct AppState {
    container: Arc<Container>,
}

impl AppState {
    pub fn new(container: Container) -> Self {
        Self {
            container: Arc::new(container),
        }
    }
}

impl HasContainer for AppState {
    fn get_container(&self) -> &Container {
        &self.container
    }
}

/// Build the full application: container, routes and interceptors
pub fn build_app(config: &ServerConfig) -> Result<Router> {
    let mut container = Container::new();
    container.register(config.clone());
    container.register(config.sheets.clone());
    AppModule::register(&mut container)?;
    tracing::debug!(providers = container.len(), "container ready");

    let interceptors = InterceptorLayer::new(vec![Box::new(LoggingInterceptor)], HttpExceptionFilter);

    Ok(AppModule::router()
        .with_state(AppState::new(container))
        .layer(interceptors))
}

//! # demo-api
//!
//! A small HTTP API showing how path, query and body parameters are
//! extracted, coerced and validated before a handler runs.
//!
//! ## Routes
//!
//! | Route | Response |
//! |---|---|
//! | `GET /` | `{"message": "Hello World"}` |
//! | `GET /hello/{name}?nickname=` | `{"message": "Hello {name} ({nickname})"}` |
//! | `GET /add/{x}/{y}` | `{"message": x + y}`, both operands in `[0, 100)` |
//! | `GET /multiply?x=&y=` | `{"message": x * y}` |
//! | `GET /multiply/{x}/{y}` | `{"message": x * y}` |
//! | `POST /users` | `{"name": ..., "friends": [...]}` |
//! | `POST /sheets` | `201 {"message": "elapsed time: ...s"}`, writes the id sheet |
//!
//! Invalid input is rejected with `422` and a `{"detail": [...]}` body, see
//! [`validation`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use demo_api::config::{ConfigService, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_config(&ConfigService::from_env())?;
//!     let app = demo_api::build_app(&config)?;
//!     let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod app_module;
pub mod common;
pub mod config;
pub mod controller;
pub mod di;
pub mod error;
pub mod exception;
pub mod interceptor;
pub mod lifecycle;
pub mod module;
pub mod modules;
pub mod pipe;
pub mod validation;

pub use app_module::{AppModule, AppState, build_app};
pub use common::{ApiResponse, Message};
pub use di::{Container, HasContainer, Inject, Injectable};
pub use error::{DemoError, Result};
pub use module::Module;

pub use async_trait::async_trait;
pub use axum;

/// Prelude module for convenient imports
///
/// ```
/// use demo_api::prelude::*;
/// ```
pub mod prelude {
    pub use crate::common::{ApiResponse, JsonInteger, Message};
    pub use crate::config::{ConfigService, ServerConfig, SheetsConfig};
    pub use crate::controller::Controller;
    pub use crate::di::{Container, HasContainer, Inject, Injectable};
    pub use crate::error::{DemoError, Result};
    pub use crate::exception::ExceptionFilter;
    pub use crate::interceptor::{Interceptor, InterceptorResult, Next};
    pub use crate::lifecycle::shutdown_signal;
    pub use crate::module::Module;
    pub use crate::pipe::builtins::*;
    pub use crate::pipe::{Pipe, PipeError, PipeExt, PipeResult};
    pub use crate::validation::{
        FromParams, Params, Validate, ValidatedJson, ValidatedPath, ValidatedQuery,
        ValidationError,
    };
    pub use async_trait::async_trait;
    pub use axum::{
        Json, Router,
        extract::{Path, Query, State},
        http::StatusCode,
        response::{IntoResponse, Response},
    };
    pub use std::sync::Arc;
}

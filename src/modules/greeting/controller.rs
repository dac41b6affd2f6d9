use crate::common::{ApiResponse, Message};
use crate::controller::Controller;
use crate::di::HasContainer;
use crate::validation::{FromParams, Params, ValidatedPath, ValidatedQuery, ValidationError};
use async_trait::async_trait;
use axum::{Router, routing::get};

pub struct GreetingController;

impl Controller for GreetingController {
    fn routes<S>() -> Router<S>
    where
        S: HasContainer + Clone + Send + Sync + 'static,
    {
        Router::new()
            .route("/", get(hello))
            .route("/hello/{name}", get(custom_hello))
    }
}

pub struct NameParam {
    pub name: String,
}

#[async_trait]
impl FromParams for NameParam {
    async fn from_params(params: &Params) -> Result<Self, ValidationError> {
        // The route only matches with a name segment present.
        Ok(Self {
            name: params.get("name").unwrap_or_default().to_string(),
        })
    }
}

pub struct NicknameQuery {
    pub nickname: Option<String>,
}

#[async_trait]
impl FromParams for NicknameQuery {
    async fn from_params(params: &Params) -> Result<Self, ValidationError> {
        Ok(Self {
            nickname: params
                .get("nickname")
                .filter(|nickname| !nickname.is_empty())
                .map(str::to_string),
        })
    }
}

async fn hello() -> ApiResponse<Message<&'static str>> {
    ApiResponse::ok(Message::new("Hello World"))
}

async fn custom_hello(
    ValidatedPath(NameParam { name }): ValidatedPath<NameParam>,
    ValidatedQuery(NicknameQuery { nickname }): ValidatedQuery<NicknameQuery>,
) -> ApiResponse<Message<String>> {
    ApiResponse::ok(Message::new(greeting(&name, nickname.as_deref())))
}

fn greeting(name: &str, nickname: Option<&str>) -> String {
    match nickname {
        Some(nickname) => format!("Hello {name} ({nickname})"),
        None => format!("Hello {name}"),
    }
}

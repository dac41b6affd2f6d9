use crate::common::{ApiResponse, JsonInteger, Message};
use crate::controller::Controller;
use crate::di::HasContainer;
use crate::modules::arithmetic::{BoundedOperands, Operands};
use crate::validation::{ValidatedPath, ValidatedQuery};
use axum::{Router, routing::get};

pub struct ArithmeticController;

impl Controller for ArithmeticController {
    fn routes<S>() -> Router<S>
    where
        S: HasContainer + Clone + Send + Sync + 'static,
    {
        Router::new()
            .route("/add/{x}/{y}", get(add))
            .route("/multiply", get(multiply))
            .route("/multiply/{x}/{y}", get(multiply_from_path))
    }
}

async fn add(
    ValidatedPath(operands): ValidatedPath<BoundedOperands>,
) -> ApiResponse<Message<JsonInteger>> {
    ApiResponse::ok(Message::new(operands.sum().into()))
}

async fn multiply(
    ValidatedQuery(operands): ValidatedQuery<Operands>,
) -> ApiResponse<Message<JsonInteger>> {
    ApiResponse::ok(Message::new(operands.product().into()))
}

async fn multiply_from_path(
    ValidatedPath(operands): ValidatedPath<Operands>,
) -> ApiResponse<Message<JsonInteger>> {
    ApiResponse::ok(Message::new(operands.product().into()))
}

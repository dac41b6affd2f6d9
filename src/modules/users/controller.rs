use crate::common::ApiResponse;
use crate::controller::Controller;
use crate::di::HasContainer;
use crate::modules::users::{User, UserSummary};
use crate::validation::ValidatedJson;
use axum::{Router, routing::post};

pub struct UsersController;

impl Controller for UsersController {
    fn routes<S>() -> Router<S>
    where
        S: HasContainer + Clone + Send + Sync + 'static,
    {
        Router::new().route("/users", post(add_user))
    }
}

async fn add_user(ValidatedJson(user): ValidatedJson<User>) -> ApiResponse<UserSummary> {
    ApiResponse::ok(user.into())
}

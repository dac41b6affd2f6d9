use crate::common::{ApiResponse, Message};
use crate::controller::Controller;
use crate::di::{HasContainer, Inject};
use crate::error::Result;
use crate::modules::sheets::{IdSheet, SheetService};
use crate::validation::ValidatedJson;
use axum::{Router, routing::post};

pub struct SheetsController;

impl Controller for SheetsController {
    fn routes<S>() -> Router<S>
    where
        S: HasContainer + Clone + Send + Sync + 'static,
    {
        Router::new().route("/sheets", post(add_sheet))
    }
}

async fn add_sheet(
    Inject(service): Inject<SheetService>,
    ValidatedJson(sheet): ValidatedJson<IdSheet>,
) -> Result<ApiResponse<Message<String>>> {
    let elapsed = service.write(&sheet).await?;
    Ok(ApiResponse::created(Message::new(format!(
        "elapsed time: {}s",
        elapsed.as_secs_f64()
    ))))
}

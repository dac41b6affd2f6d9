use crate::pipe::builtins::{EachPipe, LengthPipe, PredicatePipe};
use crate::pipe::{Pipe, PipeExt};
use crate::validation::{Loc, Validate, ValidationError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const FILENAME_MIN_LEN: usize = 1;
pub const FILENAME_MAX_LEN: usize = 10;

/// A list of ids to be written to `filename`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdSheet {
    pub filename: String,
    #[serde(deserialize_with = "crate::validation::lax::int_seq")]
    pub ids: Vec<i64>,
}

impl IdSheet {
    /// File contents: an `id` header followed by one id per line
    pub fn render(&self) -> String {
        let ids: Vec<String> = self.ids.iter().map(i64::to_string).collect();
        format!("id\n{}", ids.join("\n"))
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.contains(['/', '\\']) && name != "." && name != ".."
}

#[async_trait]
impl Validate for IdSheet {
    async fn validate(self) -> Result<Self, ValidationError> {
        let filename_pipe = LengthPipe::new()
            .min(FILENAME_MIN_LEN)
            .max(FILENAME_MAX_LEN)
            .then(PredicatePipe::new(
                |name: &String| is_plain_file_name(name),
                "filename must not be a path",
            ));
        let ids_pipe = EachPipe::new(PredicatePipe::new(|id: &i64| *id >= 0, "id is less than 0"));

        let mut errors = ValidationError::default();
        let filename = errors.collect(
            Loc::body().key("filename"),
            Value::from(self.filename.clone()),
            filename_pipe.transform(self.filename.clone()).await,
        );
        let ids = errors.collect(
            Loc::body().key("ids"),
            Value::from(self.ids.clone()),
            ids_pipe.transform(self.ids).await,
        );

        match (filename, ids) {
            (Some(filename), Some(ids)) => Ok(Self { filename, ids }),
            _ => Err(errors),
        }
    }
}

//! Structured request validation
//!
//! Every rejected request produces a [`ValidationError`] which serializes as
//!
//! ```json
//! {"detail": [{"type": "less_than", "loc": ["path", "x"], "msg": "Input should be less than 100", "input": "150"}]}
//! ```
//!
//! `loc` starts with the parameter source (`path`, `query` or `body`),
//! followed by field names and sequence indices.

use crate::pipe::{Pipe, PipeError, PipeResult};
use async_trait::async_trait;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;
use strum_macros::{Display, EnumIter, IntoStaticStr};

mod extractor;
pub mod lax;

pub use extractor::{ValidatedJson, ValidatedPath, ValidatedQuery};

/// Machine-readable category of a field error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    Missing,
    IntParsing,
    GreaterThanEqual,
    GreaterThan,
    LessThanEqual,
    LessThan,
    StringTooShort,
    StringTooLong,
    ValueError,
    JsonInvalid,
    JsonType,
    ContentType,
}

impl Serialize for ErrorKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let name: &'static str = self.into();
        serializer.serialize_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocSegment {
    Key(String),
    Index(usize),
}

/// Location of a field inside the request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Loc(Vec<LocSegment>);

impl Loc {
    pub fn path() -> Self {
        Self::root("path")
    }

    pub fn query() -> Self {
        Self::root("query")
    }

    pub fn body() -> Self {
        Self::root("body")
    }

    fn root(source: &str) -> Self {
        Self(vec![LocSegment::Key(source.to_string())])
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.0.push(LocSegment::Key(key.into()));
        self
    }

    pub fn index(mut self, index: usize) -> Self {
        self.0.push(LocSegment::Index(index));
        self
    }

    pub fn segments(&self) -> &[LocSegment] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub loc: Loc,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
}

impl FieldError {
    pub fn new(kind: ErrorKind, loc: Loc, msg: impl Into<String>) -> Self {
        Self {
            kind,
            loc,
            msg: msg.into(),
            input: None,
        }
    }

    pub fn with_input(mut self, input: Value) -> Self {
        self.input = Some(input);
        self
    }

    /// Convert a pipe rejection, descending into per-item errors so that
    /// `loc` and `input` point at the offending element.
    pub fn from_pipe(loc: Loc, input: Value, error: PipeError) -> Self {
        match error {
            PipeError::Item { index, source } => {
                let item = match &input {
                    Value::Array(items) => items.get(index).cloned().unwrap_or(Value::Null),
                    _ => Value::Null,
                };
                Self::from_pipe(loc.index(index), item, *source)
            }
            PipeError::Missing => Self::new(ErrorKind::Missing, loc, error.to_string()),
            other => Self::new(other.kind(), loc, other.to_string()).with_input(input),
        }
    }
}

/// All field errors of one rejected request
#[derive(Debug, Clone, Default, PartialEq, Serialize, thiserror::Error)]
#[error("{}", summary(.detail))]
pub struct ValidationError {
    detail: Vec<FieldError>,
}

fn summary(detail: &[FieldError]) -> String {
    match detail.len() {
        1 => "1 validation error".to_string(),
        count => format!("{count} validation errors"),
    }
}

impl ValidationError {
    pub fn single(error: FieldError) -> Self {
        Self {
            detail: vec![error],
        }
    }

    pub fn push(&mut self, error: FieldError) {
        self.detail.push(error);
    }

    /// Record the outcome of a pipe, returning the value when it passed
    pub fn collect<T>(&mut self, loc: Loc, input: Value, result: PipeResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.push(FieldError::from_pipe(loc, input, error));
                None
            }
        }
    }

    pub fn detail(&self) -> &[FieldError] {
        &self.detail
    }

    pub fn len(&self) -> usize {
        self.detail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detail.is_empty()
    }
}

/// Constraint checks run on a deserialized request body
///
/// Bodies without constraints can rely on the default, which accepts
/// the value as is.
#[async_trait]
pub trait Validate: Sized + Send + 'static {
    async fn validate(self) -> Result<Self, ValidationError> {
        Ok(self)
    }
}

/// Where a [`Params`] set was extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamSource {
    Path,
    Query,
}

impl ParamSource {
    fn loc(self, name: &str) -> Loc {
        match self {
            ParamSource::Path => Loc::path().key(name),
            ParamSource::Query => Loc::query().key(name),
        }
    }
}

/// Raw string parameters of one request
#[derive(Debug, Clone)]
pub struct Params {
    source: ParamSource,
    values: HashMap<String, String>,
}

impl Params {
    pub fn new(source: ParamSource, values: HashMap<String, String>) -> Self {
        Self { source, values }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Run `pipe` over a required parameter, recording any failure in `errors`
    pub async fn extract<P>(&self, name: &str, pipe: &P, errors: &mut ValidationError) -> Option<P::Output>
    where
        P: Pipe<Input = String>,
    {
        let loc = self.source.loc(name);
        let Some(raw) = self.values.get(name) else {
            errors.push(FieldError::from_pipe(loc, Value::Null, PipeError::Missing));
            return None;
        };
        let result = pipe.transform(raw.clone()).await;
        errors.collect(loc, Value::String(raw.clone()), result)
    }
}

/// Typed view over path or query parameters
#[async_trait]
pub trait FromParams: Sized + Send {
    async fn from_params(params: &Params) -> Result<Self, ValidationError>;
}

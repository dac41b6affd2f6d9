use crate::error::DemoError;
use crate::validation::{
    ErrorKind, FieldError, FromParams, Loc, ParamSource, Params, Validate, ValidationError,
};
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Path parameters parsed and validated through [`FromParams`]
///
/// # Example
/// ```rust,ignore
/// async fn add(ValidatedPath(operands): ValidatedPath<BoundedOperands>) -> ApiResponse<Message<JsonInteger>> {
///     ApiResponse::ok(Message::new(operands.sum().into()))
/// }
/// ```
pub struct ValidatedPath<T>(pub T);

/// Query parameters parsed and validated through [`FromParams`]
pub struct ValidatedQuery<T>(pub T);

/// A JSON body deserialized with serde, then checked with [`Validate`]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    S: Send + Sync,
    T: FromParams,
{
    type Rejection = DemoError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(values) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ValidationError::single(FieldError::new(
                    ErrorKind::ValueError,
                    Loc::path(),
                    rejection.body_text(),
                ))
            })?;

        let params = Params::new(ParamSource::Path, values);
        Ok(ValidatedPath(T::from_params(&params).await?))
    }
}

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: FromParams,
{
    type Rejection = DemoError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(values) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ValidationError::single(FieldError::new(
                    ErrorKind::ValueError,
                    Loc::query(),
                    rejection.body_text(),
                ))
            })?;

        let params = Params::new(ParamSource::Query, values);
        Ok(ValidatedQuery(T::from_params(&params).await?))
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = DemoError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        Ok(ValidatedJson(value.validate().await?))
    }
}

fn json_rejection(rejection: JsonRejection) -> ValidationError {
    let kind = match &rejection {
        JsonRejection::JsonDataError(_) => ErrorKind::JsonType,
        JsonRejection::MissingJsonContentType(_) => ErrorKind::ContentType,
        _ => ErrorKind::JsonInvalid,
    };
    ValidationError::single(FieldError::new(kind, Loc::body(), rejection.body_text()))
}

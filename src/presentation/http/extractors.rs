//! Custom Extractors
//!
//! Axum extractors for request parsing.

use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::Validate;

use crate::shared::error::AppError;
use crate::shared::validation::validation_error;

/// JSON body that has been deserialized and validated.
///
/// Any body that fails to parse, including a missing or wrong content type,
/// is rejected with `400 {"error": "Invalid request body"}`; validation
/// failures report the first offending field.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::warn!(error = %rejection.body_text(), "Invalid request body");
                AppError::BadRequest("Invalid request body".into())
            })?;

        value.validate().map_err(|e| {
            tracing::warn!(error = %e, "Request body failed validation");
            validation_error(e)
        })?;

        Ok(Self(value))
    }
}

/// Query string parameters where a repeated key keeps its first value.
///
/// Malformed query strings are rejected with `400 {"error": "Invalid query parameters"}`.
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::warn!(error = %rejection.body_text(), "Invalid query parameters");
                AppError::BadRequest("Invalid query parameters".into())
            })?;

        let mut params = Map::new();
        for (key, value) in pairs {
            params.entry(key).or_insert(Value::String(value));
        }

        serde_json::from_value(Value::Object(params))
            .map(Self)
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid query parameters");
                AppError::BadRequest("Invalid query parameters".into())
            })
    }
}

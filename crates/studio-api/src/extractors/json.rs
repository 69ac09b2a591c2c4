//! JSON body extractor with schema validation.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use studio_core::error::AppError;

use crate::error::ApiError;

/// Deserializes the JSON body and runs `validator` checks, mapping both
/// failure modes into the standard 400 envelope with field-level detail.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(format!("Invalid request body: {e}")))?;

        value.validate().map_err(|errors| {
            let details = serde_json::to_value(&errors).unwrap_or(serde_json::Value::Null);
            AppError::validation("Validation failed").with_details(details)
        })?;

        Ok(ApiJson(value))
    }
}

//! Request extractors that run before handlers.

use axum::extract::{FromRequest, Request};
use axum::Json;
use gamestore_core::error::CoreError;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has been deserialized and passed its validation rules.
///
/// Malformed JSON, missing fields and rule violations are all rejected with
/// 400 before the handler runs, so handlers only ever see valid input.
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
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate().map_err(CoreError::from)?;

        Ok(Self(value))
    }
}

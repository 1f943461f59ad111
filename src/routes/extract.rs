//! Request extractors whose rejections render as [`AppError`] bodies.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use axum_valid::{Valid, ValidationRejection};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that must deserialize and pass its `validator` rules.
///
/// Malformed JSON and failed validation both surface as
/// [`AppError::BadRequest`], so every rejection carries a `{"message"}` body.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Valid(Json(payload)) = Valid::<Json<T>>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                ValidationRejection::Valid(errors) => AppError::from(errors),
                ValidationRejection::Inner(inner) => AppError::BadRequest(inner.body_text()),
            })?;
        Ok(Self(payload))
    }
}

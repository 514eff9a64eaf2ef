//! Request extractors

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use shared::error::AppError;
use validator::Validate;

/// JSON body that has been parsed and validated before the handler runs
///
/// Any failure is a 400 and the handler never sees the request, so invalid
/// input cannot reach the database.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;
        value.validate()?;
        Ok(Self(value))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    let text = rejection.body_text();
    match rejection {
        // Well-formed JSON of the wrong shape: missing/unknown field, wrong type
        JsonRejection::JsonDataError(_) => {
            AppError::validation(text).with_detail("reason", "schema")
        }
        _ => AppError::invalid_format(text),
    }
}

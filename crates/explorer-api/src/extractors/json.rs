//! JSON body extractor with `validator` checks.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use explorer_core::error::AppError;

use crate::error::ApiError;

/// Deserializes a JSON body and runs its `Validate` rules.
///
/// Malformed bodies and failed rules are both reported as validation
/// errors so clients always get the standard error envelope.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(format!("Invalid JSON body: {}", e.body_text())))?;

        value.validate().map_err(validation_message)?;

        Ok(ValidatedJson(value))
    }
}

/// Flattens field errors into one message, e.g. `name: Name is required`.
fn validation_message(errors: ValidationErrors) -> AppError {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{field}: {msg}"),
                None => format!("{field}: {}", e.code),
            })
        })
        .collect();
    parts.sort();
    AppError::validation(parts.join("; "))
}

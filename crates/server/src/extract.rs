//! Request body extractors.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON extractor whose rejection is the fixed `Invalid input` error body.
///
/// Malformed bodies on the JSON API answer `400 {"error": "Invalid input"}`
/// instead of the default rejection text.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| AppError::BadRequest("Invalid input".to_owned()))?;
        Ok(Self(value))
    }
}

/// Extractor that accepts a form or a JSON body, chosen by `Content-Type`.
///
/// The login page posts a form while API clients post JSON; both decode into
/// the same record. Rejections answer in plain text, matching the login
/// failure response.
pub struct FormOrJson<T>(pub T);

impl<S, T> FromRequest<S> for FormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let invalid = || (StatusCode::BAD_REQUEST, "Invalid input").into_response();

        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|_| invalid())?;
            return Ok(Self(value));
        }

        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|_| invalid())?;
        Ok(Self(value))
    }
}

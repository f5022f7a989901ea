//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Extract a numeric id from the path.
///
/// Rejects non-numeric ids with 400 "Bad Request" before the handler
/// body runs, so no store call ever sees a malformed id.
pub struct ValidId(pub i32);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::BadRequest("Bad Request"))?;

        let id = raw
            .parse::<i32>()
            .map_err(|_| ApiError::BadRequest("Bad Request"))?;

        Ok(Self(id))
    }
}

/// JSON body extractor that keeps rejections in the uniform error shape.
///
/// A missing, non-JSON, or malformed body is a 400 "Bad Request" like
/// every other malformed input, instead of axum's plaintext rejection.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| ApiError::BadRequest("Bad Request"))?;

        Ok(Self(value))
    }
}

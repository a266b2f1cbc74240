//! Request extractors that reject with the API's `{"error": msg}` body.
//!
//! Session-gated routes take `Result<Json<T>, JsonRejection>` instead, so the
//! session check runs before a bad body is reported.

use axum::{
  extract::{FromRequest, FromRequestParts, Path, Request},
  http::request::Parts,
  Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// `Json<T>` that rejects with 400
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
  T: DeserializeOwned,
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    let Json(value) = Json::<T>::from_request(req, state).await?;
    Ok(ApiJson(value))
  }
}

/// `Path<T>` that rejects unparsable segments with 404
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
  T: DeserializeOwned + Send,
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
    let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
    Ok(ApiPath(value))
  }
}

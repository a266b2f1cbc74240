//! API error type shared by all handlers.

use axum::{
  extract::rejection::{JsonRejection, PathRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

use crate::db::DbLockError;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
  /// Missing or malformed request fields
  #[error("{0}")]
  Validation(String),

  /// Bad credentials or no session
  #[error("{0}")]
  Unauthorized(String),

  /// Authenticated, but the role may not do this
  #[error("{0}")]
  Forbidden(String),

  #[error("{0}")]
  NotFound(String),

  /// Duplicate email or duplicate application
  #[error("{0}")]
  Conflict(String),

  #[error("Database error: {0}")]
  Database(#[from] rusqlite::Error),

  #[error("{0}")]
  Lock(#[from] DbLockError),

  #[error("Internal error: {0}")]
  Internal(String),
}

impl ApiError {
  pub fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
      ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Conflict(_) => StatusCode::CONFLICT,
      ApiError::Database(_) | ApiError::Lock(_) | ApiError::Internal(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }
}

/// Unreadable or mistyped JSON bodies are client errors
impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::Validation(rejection.body_text())
  }
}

/// A path segment that does not parse names no resource
impl From<PathRejection> for ApiError {
  fn from(rejection: PathRejection) -> Self {
    match rejection {
      PathRejection::FailedToDeserializePathParams(_) => ApiError::NotFound("Not found".to_string()),
      other => ApiError::Internal(other.body_text()),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status_code();

    // Internal details go to the log, not the client
    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
      tracing::error!(error = %self, "Internal server error");
      "Internal server error".to_string()
    } else {
      self.to_string()
    };

    (status, Json(json!({ "error": message }))).into_response()
  }
}

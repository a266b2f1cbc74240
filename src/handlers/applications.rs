//! Job application routes.

use axum::{
  extract::{rejection::JsonRejection, State},
  Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{AuthContext, OptionalAuth};
use crate::db::{self, try_lock};
use crate::error::{ApiError, ApiResult};
use crate::services;
use crate::state::AppState;

/// Id sent either as a JSON number or as a numeric string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
  Number(i64),
  Text(String),
}

impl IdValue {
  /// Ok(None) for zero or blank, Err for non-numeric text
  fn parse(&self) -> Result<Option<i64>, ()> {
    match self {
      IdValue::Number(0) => Ok(None),
      IdValue::Number(n) => Ok(Some(*n)),
      IdValue::Text(s) if s.trim().is_empty() => Ok(None),
      IdValue::Text(s) => match s.trim().parse::<i64>() {
        Ok(0) => Ok(None),
        Ok(n) => Ok(Some(n)),
        Err(_) => Err(()),
      },
    }
  }
}

#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
  pub user_id: Option<IdValue>,
  pub job_id: Option<IdValue>,
}

impl ApplyRequest {
  /// Validated (user_id, job_id)
  pub fn ids(&self) -> ApiResult<(i64, i64)> {
    let parse = |value: &Option<IdValue>| match value {
      None => Ok(None),
      Some(v) => v.parse(),
    };

    match (parse(&self.user_id), parse(&self.job_id)) {
      (Ok(Some(user_id)), Ok(Some(job_id))) => Ok((user_id, job_id)),
      (Err(_), _) | (_, Err(_)) => Err(ApiError::Validation(
        "user_id and job_id must be numeric".to_string(),
      )),
      _ => Err(ApiError::Validation("Missing user_id or job_id".to_string())),
    }
  }
}

/// POST /apply - Record an application (any logged-in user)
pub async fn apply(
  State(state): State<AppState>,
  auth: OptionalAuth,
  body: Result<Json<ApplyRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
  auth.require(ApiError::Forbidden("Unauthorized".to_string()))?;
  let Json(body) = body?;
  let (user_id, job_id) = body.ids()?;

  let mut conn = try_lock(&state.db)?;
  services::jobs::apply(&mut conn, user_id, job_id)?;

  Ok(Json(json!({ "message": "Application submitted successfully!" })))
}

/// GET /applied-jobs - The logged-in user's applications
pub async fn applied_jobs(
  State(state): State<AppState>,
  auth: AuthContext,
) -> ApiResult<Json<Value>> {
  let conn = try_lock(&state.db)?;
  let applied = db::list_applied_jobs(&conn, auth.account_id)?;
  Ok(Json(json!({ "applied_jobs": applied })))
}

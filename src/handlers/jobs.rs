//! Job posting routes.

use axum::{
  extract::{rejection::JsonRejection, State},
  http::StatusCode,
  Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::OptionalAuth;
use crate::db::{self, try_lock};
use crate::domain::{Applicant, Job, NewJob};
use crate::error::{ApiError, ApiResult};
use crate::extract::ApiPath;
use crate::handlers::present;
use crate::services;
use crate::state::AppState;

/// Missing sessions on job routes answer 404, which the frontend treats as "go log in"
fn no_session() -> ApiError {
  ApiError::NotFound("User not authorized".to_string())
}

#[derive(Debug, Default, Deserialize)]
pub struct PostJobRequest {
  pub title: Option<String>,
  pub skills: Option<String>,
  pub education: Option<String>,
  pub working_mode: Option<String>,
  pub working_hours: Option<String>,
  pub experience: Option<String>,
  pub package: Option<String>,
  pub location: Option<String>,
}

impl PostJobRequest {
  pub fn into_new_job(self) -> ApiResult<NewJob> {
    let title = present(self.title)
      .ok_or_else(|| ApiError::Validation("Job title is required".to_string()))?;
    Ok(NewJob {
      title,
      skills: self.skills,
      education: self.education,
      working_mode: self.working_mode,
      working_hours: self.working_hours,
      experience: self.experience,
      package: self.package,
      location: self.location,
    })
  }
}

/// GET /jobs - Every job with its company name (any logged-in user)
pub async fn list_jobs(
  State(state): State<AppState>,
  auth: OptionalAuth,
) -> ApiResult<Json<Vec<Job>>> {
  auth.require(no_session())?;

  let conn = try_lock(&state.db)?;
  Ok(Json(db::list_jobs(&conn)?))
}

/// POST /company/post-job - Create a job owned by the logged-in company
pub async fn post_job(
  State(state): State<AppState>,
  auth: OptionalAuth,
  body: Result<Json<PostJobRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Value>)> {
  let company_id = auth.require(no_session())?.require_company()?;
  let Json(body) = body?;
  let job = body.into_new_job()?;

  let conn = try_lock(&state.db)?;
  let job_id = db::insert_job(&conn, company_id, &job)?;
  tracing::info!("Company {} posted job {}", company_id, job_id);

  Ok((
    StatusCode::CREATED,
    Json(json!({ "message": "Job posted successfully" })),
  ))
}

/// DELETE /company/delete-job/{id}
///
/// No session or ownership check, and deleting a missing job still succeeds.
pub async fn delete_job(
  State(state): State<AppState>,
  ApiPath(job_id): ApiPath<i64>,
) -> ApiResult<Json<Value>> {
  let conn = try_lock(&state.db)?;
  let removed = db::delete_job(&conn, job_id)?;
  tracing::info!("Deleted job {} ({} row(s))", job_id, removed);

  Ok(Json(json!({ "message": "Job deleted successfully" })))
}

/// GET /job/{id} - Public job details
pub async fn get_job(
  State(state): State<AppState>,
  ApiPath(job_id): ApiPath<i64>,
) -> ApiResult<Json<Job>> {
  let conn = try_lock(&state.db)?;
  db::get_job(&conn, job_id)?
    .map(Json)
    .ok_or_else(|| ApiError::NotFound("Job not found".to_string()))
}

/// GET /job-applicants/{id} - Applicants of a job, for the company that posted it
pub async fn job_applicants(
  State(state): State<AppState>,
  auth: OptionalAuth,
  ApiPath(job_id): ApiPath<i64>,
) -> ApiResult<Json<Vec<Applicant>>> {
  let company_id = auth.require(no_session())?.require_company()?;

  let conn = try_lock(&state.db)?;
  Ok(Json(services::jobs::job_applicants(&conn, company_id, job_id)?))
}

//! Job and application service.

use rusqlite::Connection;

use crate::auth::db as auth_db;
use crate::db::{self, is_unique_violation};
use crate::domain::Applicant;
use crate::error::{ApiError, ApiResult};

const ALREADY_APPLIED: &str = "You have already applied for this job";

/// Record that `user_id` applied to `job_id`, returns the application id.
///
/// The duplicate check and the insert run in one transaction; the unique
/// index on (user_id, job_id) backs the check.
pub fn apply(conn: &mut Connection, user_id: i64, job_id: i64) -> ApiResult<i64> {
    let tx = conn.transaction()?;

    if db::get_job_owner(&tx, job_id)?.is_none() {
        return Err(ApiError::NotFound("Job not found".to_string()));
    }
    if !auth_db::account_exists(&tx, user_id)? {
        return Err(ApiError::NotFound("User not found".to_string()));
    }
    if db::application_exists(&tx, user_id, job_id)? {
        return Err(ApiError::Conflict(ALREADY_APPLIED.to_string()));
    }

    let id = match db::insert_application(&tx, user_id, job_id) {
        Ok(id) => id,
        Err(e) if is_unique_violation(&e) => {
            return Err(ApiError::Conflict(ALREADY_APPLIED.to_string()));
        }
        Err(e) => return Err(e.into()),
    };
    tx.commit()?;

    tracing::debug!("User {} applied to job {}", user_id, job_id);
    Ok(id)
}

/// Applicants of a job, visible only to the company that posted it
pub fn job_applicants(conn: &Connection, company_id: i64, job_id: i64) -> ApiResult<Vec<Applicant>> {
    match db::get_job_owner(conn, job_id)? {
        None => Err(ApiError::NotFound("Job not found".to_string())),
        Some(owner) if owner != company_id => {
            Err(ApiError::Forbidden("Not the owner of this job".to_string()))
        }
        Some(_) => Ok(db::list_job_applicants(conn, job_id)?),
    }
}

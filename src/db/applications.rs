use chrono::Utc;
use rusqlite::{params, Connection, Result};

use crate::domain::AppliedJob;

/// Check if `user_id` already applied to `job_id`
pub fn application_exists(conn: &Connection, user_id: i64, job_id: i64) -> Result<bool> {
  let count: i64 = conn.query_row(
    "SELECT COUNT(*) FROM applied_jobs WHERE user_id = ?1 AND job_id = ?2",
    params![user_id, job_id],
    |row| row.get(0),
  )?;
  Ok(count > 0)
}

/// Record an application, returns its id
pub fn insert_application(conn: &Connection, user_id: i64, job_id: i64) -> Result<i64> {
  let now = Utc::now().to_rfc3339();
  conn.execute(
    "INSERT INTO applied_jobs (user_id, job_id, applied_at) VALUES (?1, ?2, ?3)",
    params![user_id, job_id, now],
  )?;
  Ok(conn.last_insert_rowid())
}

/// Applications of one user joined with job and company details
pub fn list_applied_jobs(conn: &Connection, user_id: i64) -> Result<Vec<AppliedJob>> {
  let mut stmt = conn.prepare(
    r#"
    SELECT j.id, j.title, j.location, j.package, c.company_name
    FROM applied_jobs a
    JOIN jobs j ON a.job_id = j.id
    LEFT JOIN companies c ON j.company_id = c.user_id
    WHERE a.user_id = ?1
    ORDER BY a.id ASC
    "#,
  )?;
  let jobs = stmt
    .query_map(params![user_id], |row| {
      Ok(AppliedJob {
        job_id: row.get(0)?,
        title: row.get(1)?,
        location: row.get(2)?,
        package: row.get(3)?,
        company_name: row.get(4)?,
      })
    })?
    .collect::<Result<Vec<_>>>()?;
  Ok(jobs)
}

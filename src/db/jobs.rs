use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

use crate::domain::{Applicant, Job, NewJob};

const JOB_COLUMNS: &str = r#"
  j.id, j.title, j.company_id, j.skills, j.education, j.working_mode, j.working_hours,
  j.experience, j.package, j.location, c.company_name
"#;

fn row_to_job(row: &Row) -> Result<Job> {
  Ok(Job {
    id: row.get(0)?,
    title: row.get(1)?,
    company_id: row.get(2)?,
    skills: row.get(3)?,
    education: row.get(4)?,
    working_mode: row.get(5)?,
    working_hours: row.get(6)?,
    experience: row.get(7)?,
    package: row.get(8)?,
    location: row.get(9)?,
    company_name: row.get(10)?,
  })
}

/// All jobs with their company name, oldest first
pub fn list_jobs(conn: &Connection) -> Result<Vec<Job>> {
  let mut stmt = conn.prepare(&format!(
    r#"SELECT {JOB_COLUMNS}
       FROM jobs j
       LEFT JOIN companies c ON j.company_id = c.user_id
       ORDER BY j.id ASC"#
  ))?;
  let jobs = stmt
    .query_map([], row_to_job)?
    .collect::<Result<Vec<_>>>()?;
  Ok(jobs)
}

pub fn get_job(conn: &Connection, job_id: i64) -> Result<Option<Job>> {
  conn
    .query_row(
      &format!(
        r#"SELECT {JOB_COLUMNS}
           FROM jobs j
           LEFT JOIN companies c ON j.company_id = c.user_id
           WHERE j.id = ?1"#
      ),
      params![job_id],
      row_to_job,
    )
    .optional()
}

/// Owning company of a job, None if the job does not exist
pub fn get_job_owner(conn: &Connection, job_id: i64) -> Result<Option<i64>> {
  conn
    .query_row(
      "SELECT company_id FROM jobs WHERE id = ?1",
      params![job_id],
      |row| row.get(0),
    )
    .optional()
}

/// Insert a job posted by `company_id`, returns the job id
pub fn insert_job(conn: &Connection, company_id: i64, job: &NewJob) -> Result<i64> {
  let now = Utc::now().to_rfc3339();
  conn.execute(
    r#"
    INSERT INTO jobs (title, company_id, skills, education, working_mode, working_hours,
                      experience, package, location, created_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
    "#,
    params![
      job.title,
      company_id,
      job.skills,
      job.education,
      job.working_mode,
      job.working_hours,
      job.experience,
      job.package,
      job.location,
      now,
    ],
  )?;
  Ok(conn.last_insert_rowid())
}

/// Delete a job by id, returns the number of rows removed (0 or 1)
pub fn delete_job(conn: &Connection, job_id: i64) -> Result<usize> {
  conn.execute("DELETE FROM jobs WHERE id = ?1", params![job_id])
}

/// Job seekers who applied to a job, in application order
pub fn list_job_applicants(conn: &Connection, job_id: i64) -> Result<Vec<Applicant>> {
  let mut stmt = conn.prepare(
    r#"
    SELECT a.user_id, e.name, e.skills, e.education, e.experience, e.location, e.date_of_birth
    FROM applied_jobs a
    LEFT JOIN employees e ON a.user_id = e.user_id
    WHERE a.job_id = ?1
    ORDER BY a.id ASC
    "#,
  )?;
  let applicants = stmt
    .query_map(params![job_id], |row| {
      Ok(Applicant {
        id: row.get(0)?,
        name: row.get(1)?,
        skills: row.get(2)?,
        education: row.get(3)?,
        experience: row.get(4)?,
        location: row.get(5)?,
        date_of_birth: row.get(6)?,
      })
    })?
    .collect::<Result<Vec<_>>>()?;
  Ok(applicants)
}

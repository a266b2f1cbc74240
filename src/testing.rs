//! Test utilities for database setup.
//!
//! Reuses the authoritative migrations so tests never carry their own copy
//! of the schema.

use rusqlite::Connection;
use tempfile::TempDir;

use crate::auth::db as auth_db;
use crate::db;
use crate::domain::{CompanyProfile, EmployeeProfile, NewJob, UserType};

/// Migrated database file inside a temporary directory, removed on drop.
pub struct TestEnv {
    /// Temporary directory (kept alive for database file persistence)
    pub temp: TempDir,
    pub conn: Connection,
}

impl TestEnv {
    pub fn new() -> rusqlite::Result<Self> {
        let temp =
            TempDir::new().map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let conn = Connection::open(temp.path().join("job_corner.db"))?;
        db::configure(&conn)?;
        db::run_migrations(&conn)?;

        Ok(Self { temp, conn })
    }

    /// Insert an employee account with a minimal profile, returns the account id
    pub fn employee(&self, email: &str) -> rusqlite::Result<i64> {
        let id = auth_db::create_account(&self.conn, email, "hash", UserType::Employee)?;
        let profile = EmployeeProfile {
            name: Some(email.to_string()),
            ..Default::default()
        };
        auth_db::insert_employee_profile(&self.conn, id, &profile)?;
        Ok(id)
    }

    /// Insert a company account with the given display name, returns the account id
    pub fn company(&self, email: &str, company_name: &str) -> rusqlite::Result<i64> {
        let id = auth_db::create_account(&self.conn, email, "hash", UserType::Company)?;
        let profile = CompanyProfile {
            company_name: Some(company_name.to_string()),
            ..Default::default()
        };
        auth_db::insert_company_profile(&self.conn, id, &profile)?;
        Ok(id)
    }

    /// Insert a job with only a title, returns the job id
    pub fn job(&self, company_id: i64, title: &str) -> rusqlite::Result<i64> {
        let job = NewJob {
            title: title.to_string(),
            ..Default::default()
        };
        db::insert_job(&self.conn, company_id, &job)
    }
}

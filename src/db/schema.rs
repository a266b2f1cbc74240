//! Database schema with version-gated migrations.
//!
//! Each migration checks the recorded version, runs its SQL inside a
//! transaction and records the new version in `db_version`. Fresh databases
//! run every migration once; existing ones only run what they are missing.

use chrono::Utc;
use rusqlite::{params, Connection, Result};

/// Current schema version. Increment when adding a migration.
pub const SCHEMA_VERSION: i32 = 2;

pub fn run_migrations(conn: &Connection) -> Result<()> {
  // Bootstrap: db_version is needed to read the current version
  conn.execute_batch(
    r#"
    CREATE TABLE IF NOT EXISTS db_version (
      version INTEGER PRIMARY KEY,
      applied_at TEXT NOT NULL,
      description TEXT
    );
    "#,
  )?;

  let current_version = get_schema_version(conn)?;
  tracing::debug!("job_corner schema version: {}", current_version);

  if current_version < 1 {
    migrate_v0_to_v1(conn)?;
  }
  if current_version < 2 {
    migrate_v1_to_v2(conn)?;
  }

  Ok(())
}

/// v0→v1: accounts, role profiles, jobs and applications
fn migrate_v0_to_v1(conn: &Connection) -> Result<()> {
  tracing::info!("Running migration v0→v1: Create base tables");

  let tx = conn.unchecked_transaction()?;
  tx.execute_batch(
    r#"
    CREATE TABLE IF NOT EXISTS accounts (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      email TEXT NOT NULL UNIQUE,
      password_hash TEXT NOT NULL,
      user_type TEXT NOT NULL CHECK (user_type IN ('employee', 'company')),
      created_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS employees (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      user_id INTEGER NOT NULL UNIQUE,
      name TEXT,
      skills TEXT,
      education TEXT,
      experience TEXT,
      location TEXT,
      date_of_birth TEXT,
      FOREIGN KEY (user_id) REFERENCES accounts(id) ON DELETE CASCADE
    );

    CREATE TABLE IF NOT EXISTS companies (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      user_id INTEGER NOT NULL UNIQUE,
      name TEXT,
      company_name TEXT,
      industry TEXT,
      company_description TEXT,
      FOREIGN KEY (user_id) REFERENCES accounts(id) ON DELETE CASCADE
    );

    CREATE TABLE IF NOT EXISTS jobs (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      title TEXT NOT NULL,
      company_id INTEGER NOT NULL,
      skills TEXT,
      education TEXT,
      working_mode TEXT,
      working_hours TEXT,
      experience TEXT,
      package TEXT,
      location TEXT,
      created_at TEXT NOT NULL,
      FOREIGN KEY (company_id) REFERENCES accounts(id) ON DELETE CASCADE
    );

    CREATE TABLE IF NOT EXISTS applied_jobs (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      user_id INTEGER NOT NULL,
      job_id INTEGER NOT NULL,
      applied_at TEXT NOT NULL,
      UNIQUE (user_id, job_id),
      FOREIGN KEY (user_id) REFERENCES accounts(id) ON DELETE CASCADE,
      FOREIGN KEY (job_id) REFERENCES jobs(id) ON DELETE CASCADE
    );

    CREATE INDEX IF NOT EXISTS idx_jobs_company_id ON jobs(company_id);
    CREATE INDEX IF NOT EXISTS idx_applied_jobs_job_id ON applied_jobs(job_id);
    "#,
  )?;
  record_version(&tx, 1, "Create base tables (accounts, profiles, jobs, applied_jobs)")?;
  tx.commit()
}

/// v1→v2: server-side login sessions
fn migrate_v1_to_v2(conn: &Connection) -> Result<()> {
  tracing::info!("Running migration v1→v2: Add sessions");

  let tx = conn.unchecked_transaction()?;
  tx.execute_batch(
    r#"
    CREATE TABLE IF NOT EXISTS sessions (
      id TEXT PRIMARY KEY,
      account_id INTEGER NOT NULL,
      user_type TEXT NOT NULL,
      created_at TEXT NOT NULL,
      expires_at TEXT NOT NULL,
      last_access_at TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_sessions_account_id ON sessions(account_id);
    CREATE INDEX IF NOT EXISTS idx_sessions_expires_at ON sessions(expires_at);
    "#,
  )?;
  record_version(&tx, 2, "Add sessions table")?;
  tx.commit()
}

/// Record a schema version after successful migration
fn record_version(conn: &Connection, version: i32, description: &str) -> Result<()> {
  let now = Utc::now().to_rfc3339();
  conn.execute(
    "INSERT INTO db_version (version, applied_at, description) VALUES (?1, ?2, ?3)",
    params![version, now, description],
  )?;
  tracing::info!("Recorded schema version {} - {}", version, description);
  Ok(())
}

/// Get current schema version (0 if no versions recorded)
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
  conn.query_row("SELECT COALESCE(MAX(version), 0) FROM db_version", [], |row| row.get(0))
}

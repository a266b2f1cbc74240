//! Account, profile and session queries.

use chrono::{Duration, Utc};
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

use crate::db::LogOnError;
use crate::domain::{Account, CompanyProfile, EmployeeProfile, UserType};

fn row_to_account(row: &Row) -> Result<Account> {
    Ok(Account {
        id: row.get(0)?,
        email: row.get(1)?,
        password_hash: row.get(2)?,
        user_type: row.get(3)?,
    })
}

/// Check if an email is already registered
pub fn email_exists(conn: &Connection, email: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM accounts WHERE email = ?1",
        params![email],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Check if an account id exists
pub fn account_exists(conn: &Connection, account_id: i64) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM accounts WHERE id = ?1",
        params![account_id],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Create a new account, returns the account ID
pub fn create_account(
    conn: &Connection,
    email: &str,
    password_hash: &str,
    user_type: UserType,
) -> Result<i64> {
    let now = Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO accounts (email, password_hash, user_type, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![email, password_hash, user_type, now],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_employee_profile(
    conn: &Connection,
    account_id: i64,
    profile: &EmployeeProfile,
) -> Result<()> {
    conn.execute(
        r#"INSERT INTO employees (user_id, name, skills, education, experience, location, date_of_birth)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"#,
        params![
            account_id,
            profile.name,
            profile.skills,
            profile.education,
            profile.experience,
            profile.location,
            profile.date_of_birth,
        ],
    )?;
    Ok(())
}

pub fn insert_company_profile(
    conn: &Connection,
    account_id: i64,
    profile: &CompanyProfile,
) -> Result<()> {
    conn.execute(
        r#"INSERT INTO companies (user_id, name, company_name, industry, company_description)
           VALUES (?1, ?2, ?3, ?4, ?5)"#,
        params![
            account_id,
            profile.name,
            profile.company_name,
            profile.industry,
            profile.company_description,
        ],
    )?;
    Ok(())
}

pub fn get_account_by_email(conn: &Connection, email: &str) -> Result<Option<Account>> {
    conn.query_row(
        "SELECT id, email, password_hash, user_type FROM accounts WHERE email = ?1",
        params![email],
        row_to_account,
    )
    .optional()
}

pub fn get_account_by_id(conn: &Connection, account_id: i64) -> Result<Option<Account>> {
    conn.query_row(
        "SELECT id, email, password_hash, user_type FROM accounts WHERE id = ?1",
        params![account_id],
        row_to_account,
    )
    .optional()
}

pub fn get_employee_profile(conn: &Connection, account_id: i64) -> Result<Option<EmployeeProfile>> {
    conn.query_row(
        r#"SELECT name, skills, education, experience, location, date_of_birth
           FROM employees WHERE user_id = ?1"#,
        params![account_id],
        |row| {
            Ok(EmployeeProfile {
                name: row.get(0)?,
                skills: row.get(1)?,
                education: row.get(2)?,
                experience: row.get(3)?,
                location: row.get(4)?,
                date_of_birth: row.get(5)?,
            })
        },
    )
    .optional()
}

pub fn get_company_profile(conn: &Connection, account_id: i64) -> Result<Option<CompanyProfile>> {
    conn.query_row(
        r#"SELECT name, company_name, industry, company_description
           FROM companies WHERE user_id = ?1"#,
        params![account_id],
        |row| {
            Ok(CompanyProfile {
                name: row.get(0)?,
                company_name: row.get(1)?,
                industry: row.get(2)?,
                company_description: row.get(3)?,
            })
        },
    )
    .optional()
}

/// Create a new session
pub fn create_session(
    conn: &Connection,
    session_id: &str,
    account_id: i64,
    user_type: UserType,
    duration_hours: i64,
) -> Result<()> {
    let now = Utc::now();
    let expires = now + Duration::hours(duration_hours);
    conn.execute(
        r#"INSERT INTO sessions (id, account_id, user_type, created_at, expires_at, last_access_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)"#,
        params![
            session_id,
            account_id,
            user_type,
            now.to_rfc3339(),
            expires.to_rfc3339(),
            now.to_rfc3339()
        ],
    )?;
    Ok(())
}

/// Validate session and get its identity, returns (account_id, user_type)
pub fn get_session(conn: &Connection, session_id: &str) -> Result<Option<(i64, UserType)>> {
    let now = Utc::now().to_rfc3339();
    let result = conn
        .query_row(
            "SELECT account_id, user_type FROM sessions WHERE id = ?1 AND expires_at > ?2",
            params![session_id, now],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    if result.is_some() {
        conn.execute(
            "UPDATE sessions SET last_access_at = ?1 WHERE id = ?2",
            params![now, session_id],
        )
        .log_warn("Failed to update session access time");
    }
    Ok(result)
}

/// Delete a session (logout)
pub fn delete_session(conn: &Connection, session_id: &str) -> Result<()> {
    conn.execute("DELETE FROM sessions WHERE id = ?1", params![session_id])?;
    Ok(())
}

/// Cleanup expired sessions, returns count of deleted sessions
pub fn cleanup_expired_sessions(conn: &Connection) -> Result<usize> {
    let now = Utc::now().to_rfc3339();
    let count = conn.execute("DELETE FROM sessions WHERE expires_at < ?1", params![now])?;
    Ok(count)
}

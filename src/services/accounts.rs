//! Account service: registration, login and profile lookup.

use rusqlite::Connection;
use serde::Serialize;

use crate::auth::db as auth_db;
use crate::auth::password;
use crate::db::{is_unique_violation, LogOnError};
use crate::domain::{Account, CompanyProfile, EmployeeProfile, Profile, UserType};
use crate::error::{ApiError, ApiResult};
use crate::session::generate_session_id;

const DUPLICATE_EMAIL: &str = "Email already registered";
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Validated registration input
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub profile: Profile,
}

/// Role profile of an account (None if the profile row is missing).
/// Serializes as an `employee_details` or `company_details` entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ProfileDetails {
    #[serde(rename = "employee_details")]
    Employee(Option<EmployeeProfile>),
    #[serde(rename = "company_details")]
    Company(Option<CompanyProfile>),
}

impl Registration {
    /// Argon2 hash of the password. Slow; call it without holding the database lock.
    pub fn hash_password(&self) -> ApiResult<String> {
        password::hash_password(&self.password)
            .map_err(|e| ApiError::Internal(format!("Failed to hash password: {}", e)))
    }
}

/// Create an account and its role profile atomically, returns the account id.
///
/// Both inserts share one transaction, so a failed profile insert leaves no
/// orphaned account behind.
pub fn register(
    conn: &mut Connection,
    registration: &Registration,
    password_hash: &str,
) -> ApiResult<i64> {
    if auth_db::email_exists(conn, &registration.email)? {
        return Err(ApiError::Conflict(DUPLICATE_EMAIL.to_string()));
    }

    let tx = conn.transaction()?;
    let user_type = registration.profile.user_type();
    let account_id =
        match auth_db::create_account(&tx, &registration.email, password_hash, user_type) {
            Ok(id) => id,
            // Lost a race with a concurrent registration of the same email
            Err(e) if is_unique_violation(&e) => {
                return Err(ApiError::Conflict(DUPLICATE_EMAIL.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

    match &registration.profile {
        Profile::Employee(profile) => auth_db::insert_employee_profile(&tx, account_id, profile)?,
        Profile::Company(profile) => auth_db::insert_company_profile(&tx, account_id, profile)?,
    }
    tx.commit()?;

    tracing::info!("Registered {} account {}", user_type.as_str(), account_id);
    Ok(account_id)
}

/// Check `password` against the account found by email (None if no such email)
pub fn verify_credentials(account: Option<Account>, password: &str) -> ApiResult<Account> {
    account
        .filter(|account| password::verify_password(password, &account.password_hash))
        .ok_or_else(|| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))
}

/// Open a session for `account`, returns the new session id.
///
/// The caller's `previous` session and any expired sessions are removed first.
pub fn open_session(
    conn: &Connection,
    account: &Account,
    previous: Option<&str>,
    duration_hours: i64,
) -> ApiResult<String> {
    if let Some(previous) = previous {
        auth_db::delete_session(conn, previous).log_warn("Failed to delete previous session");
    }
    auth_db::cleanup_expired_sessions(conn).log_warn("Failed to clean up expired sessions");

    let session_id = generate_session_id();
    auth_db::create_session(conn, &session_id, account.id, account.user_type, duration_hours)?;
    Ok(session_id)
}

/// Load an account with its role-specific profile
pub fn load_profile(conn: &Connection, account_id: i64) -> ApiResult<(Account, ProfileDetails)> {
    let account = auth_db::get_account_by_id(conn, account_id)?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let details = match account.user_type {
        UserType::Employee => {
            ProfileDetails::Employee(auth_db::get_employee_profile(conn, account_id)?)
        }
        UserType::Company => ProfileDetails::Company(auth_db::get_company_profile(conn, account_id)?),
    };

    Ok((account, details))
}

//! Authentication handlers for register, login, and logout.

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::{json, Value};

use super::db as auth_db;
use crate::db::try_lock;
use crate::domain::{CompanyProfile, EmployeeProfile, Profile, UserType};
use crate::error::{ApiError, ApiResult};
use crate::extract::ApiJson;
use crate::handlers::present;
use crate::services::accounts::{self, Registration};
use crate::session::{removal_cookie, session_cookie, SESSION_COOKIE_NAME};
use crate::state::AppState;

/// Registration body. Role fields accept the frontend's camelCase names and
/// snake_case.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub user_type: Option<String>,
    pub name: Option<String>,
    pub skills: Option<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "dateOfBirth", alias = "date_of_birth")]
    pub date_of_birth: Option<String>,
    #[serde(rename = "companyName", alias = "company_name")]
    pub company_name: Option<String>,
    pub industry: Option<String>,
    #[serde(rename = "companyDescription", alias = "company_description")]
    pub company_description: Option<String>,
}

impl RegisterRequest {
    /// Check required fields and pick the role profile
    pub fn into_registration(self) -> ApiResult<Registration> {
        let (Some(email), Some(password), Some(user_type)) = (
            present(self.email),
            present(self.password),
            present(self.user_type),
        ) else {
            return Err(ApiError::Validation("All fields are required".to_string()));
        };

        let profile = match UserType::from_str(&user_type) {
            Some(UserType::Employee) => Profile::Employee(EmployeeProfile {
                name: self.name,
                skills: self.skills,
                education: self.education,
                experience: self.experience,
                location: self.location,
                date_of_birth: self.date_of_birth,
            }),
            Some(UserType::Company) => Profile::Company(CompanyProfile {
                name: self.name,
                company_name: self.company_name,
                industry: self.industry,
                company_description: self.company_description,
            }),
            None => {
                return Err(ApiError::Validation(
                    "user_type must be 'employee' or 'company'".to_string(),
                ));
            }
        };

        Ok(Registration {
            email,
            password,
            profile,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /register - Create an account and its role profile
pub async fn register(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let registration = body.into_registration()?;
    let password_hash = registration.hash_password()?;

    let mut conn = try_lock(&state.db)?;
    accounts::register(&mut conn, &registration, &password_hash)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered successfully" })),
    ))
}

/// POST /login - Verify credentials and set the session cookie
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(body): ApiJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<Value>)> {
    let (Some(email), Some(password)) = (present(body.email), present(body.password)) else {
        return Err(ApiError::Validation(
            "Email and password are required".to_string(),
        ));
    };

    let account = {
        let conn = try_lock(&state.db)?;
        auth_db::get_account_by_email(&conn, &email)?
    };
    let account = accounts::verify_credentials(account, &password)?;

    let previous = jar.get(SESSION_COOKIE_NAME).map(|c| c.value().to_string());
    let session_id = {
        let conn = try_lock(&state.db)?;
        accounts::open_session(
            &conn,
            &account,
            previous.as_deref(),
            state.cookies.duration_hours,
        )?
    };

    tracing::info!("Account {} logged in", account.id);

    let body = json!({
        "message": "Login successful",
        "user": {
            "email": account.email,
            "user_type": account.user_type,
            "user_id": account.id,
        }
    });
    Ok((jar.add(session_cookie(session_id, &state.cookies)), Json(body)))
}

/// POST /logout - Drop the session. Succeeds with or without one.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<(CookieJar, Json<Value>)> {
    if let Some(session_cookie) = jar.get(SESSION_COOKIE_NAME) {
        let conn = try_lock(&state.db)?;
        if let Err(e) = auth_db::delete_session(&conn, session_cookie.value()) {
            tracing::warn!("Failed to delete session during logout: {}", e);
        }
    }

    Ok((
        jar.remove(removal_cookie()),
        Json(json!({ "message": "Logged out successfully" })),
    ))
}

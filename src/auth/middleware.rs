//! Session extractors.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;

use super::db as auth_db;
use crate::db::try_lock;
use crate::domain::UserType;
use crate::error::ApiError;
use crate::session::SESSION_COOKIE_NAME;
use crate::state::AppState;

/// Authenticated request context.
/// Add this as a handler parameter to require a session; rejects with 401.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub account_id: i64,
    pub user_type: UserType,
    pub session_id: String,
}

impl AuthContext {
    /// Company identity of the caller, or 403 for job seekers
    pub fn require_company(&self) -> Result<i64, ApiError> {
        match self.user_type {
            UserType::Company => Ok(self.account_id),
            UserType::Employee => Err(ApiError::Forbidden("Unauthorized".to_string())),
        }
    }

    fn resolve(parts: &Parts, state: &AppState) -> Result<Option<Self>, ApiError> {
        let jar = CookieJar::from_headers(&parts.headers);
        let Some(session_id) = jar.get(SESSION_COOKIE_NAME).map(|c| c.value().to_string()) else {
            return Ok(None);
        };

        let conn = try_lock(&state.db)?;
        let session = auth_db::get_session(&conn, &session_id)?;

        Ok(session.map(|(account_id, user_type)| AuthContext {
            account_id,
            user_type,
            session_id,
        }))
    }
}

impl FromRequestParts<AppState> for AuthContext {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Self::resolve(parts, state)?
            .ok_or_else(|| ApiError::Unauthorized("Unauthorized, please log in".to_string()))
    }
}

/// Optional authentication extractor.
/// Holds Some(AuthContext) with a live session, None otherwise. Lets routes
/// answer a missing session with their own status code.
pub struct OptionalAuth(pub Option<AuthContext>);

impl OptionalAuth {
    /// Unwrap the session or fail with `missing`
    pub fn require(self, missing: ApiError) -> Result<AuthContext, ApiError> {
        self.0.ok_or(missing)
    }
}

impl FromRequestParts<AppState> for OptionalAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuth(AuthContext::resolve(parts, state)?))
    }
}

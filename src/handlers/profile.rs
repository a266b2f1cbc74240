use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::auth::AuthContext;
use crate::db::try_lock;
use crate::domain::UserType;
use crate::error::ApiResult;
use crate::services::accounts::{self, ProfileDetails};
use crate::state::AppState;

/// Account fields merged with the role profile
#[derive(Debug, Serialize)]
pub struct ProfileUser {
  pub email: String,
  pub user_type: UserType,
  #[serde(flatten)]
  pub details: ProfileDetails,
}

/// GET /profile - Current account and its role profile
pub async fn profile(State(state): State<AppState>, auth: AuthContext) -> ApiResult<Json<Value>> {
  let conn = try_lock(&state.db)?;
  let (account, details) = accounts::load_profile(&conn, auth.account_id)?;

  let user = ProfileUser {
    email: account.email,
    user_type: account.user_type,
    details,
  };
  Ok(Json(json!({
    "message": "Profile fetched successfully",
    "user": user,
  })))
}

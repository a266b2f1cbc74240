//! Session id generation and cookie construction.

use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::state::CookieSettings;

pub const SESSION_COOKIE_NAME: &str = "job_corner_session";

const SESSION_ID_LEN: usize = 32;

/// Generate a new session ID
pub fn generate_session_id() -> String {
  use rand::Rng;
  let mut rng = rand::rng();
  (0..SESSION_ID_LEN)
    .map(|_| {
      let idx = rng.random_range(0..36);
      if idx < 10 {
        (b'0' + idx) as char
      } else {
        (b'a' + idx - 10) as char
      }
    })
    .collect()
}

/// Session cookie carrying `session_id`
pub fn session_cookie(session_id: String, settings: &CookieSettings) -> Cookie<'static> {
  // Cross-origin frontends only send the cookie back with SameSite=None, which requires Secure
  let same_site = if settings.secure {
    SameSite::None
  } else {
    SameSite::Lax
  };

  Cookie::build((SESSION_COOKIE_NAME, session_id))
    .path("/")
    .http_only(true)
    .secure(settings.secure)
    .same_site(same_site)
    .max_age(time::Duration::hours(settings.duration_hours))
    .build()
}

/// Expired session cookie used to clear the client's copy
pub fn removal_cookie() -> Cookie<'static> {
  Cookie::build((SESSION_COOKIE_NAME, ""))
    .path("/")
    .max_age(time::Duration::seconds(0))
    .build()
}

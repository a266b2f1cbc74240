//! Application state shared by all handlers.

use crate::db::DbPool;

/// Session cookie attributes
#[derive(Debug, Clone, Copy)]
pub struct CookieSettings {
    /// Mark the cookie `Secure` and `SameSite=None`
    pub secure: bool,
    pub duration_hours: i64,
}

/// Application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub cookies: CookieSettings,
}

impl AppState {
    pub fn new(db: DbPool, cookies: CookieSettings) -> Self {
        Self { db, cookies }
    }
}

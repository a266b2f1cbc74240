//! Application configuration.
//!
//! Every setting is resolved with the same priority: `config.toml`, then
//! the environment (including `.env`), then a built-in default.

use serde::Deserialize;
use std::path::PathBuf;

use crate::state::CookieSettings;

// ==================== Defaults ====================

/// Server address to bind to
pub const SERVER_ADDR: &str = "0.0.0.0";

pub const DEFAULT_SERVER_PORT: u16 = 5000;

pub const DEFAULT_DATABASE_PATH: &str = "data/job_corner.db";

/// Frontend origin allowed to make credentialed requests
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Session duration in hours (1 week)
pub const DEFAULT_SESSION_DURATION_HOURS: i64 = 24 * 7;

pub const CONFIG_FILE: &str = "config.toml";

// ==================== config.toml ====================

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    database: Option<DatabaseSection>,
    server: Option<ServerSection>,
    session: Option<SessionSection>,
}

#[derive(Debug, Default, Deserialize)]
struct DatabaseSection {
    path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ServerSection {
    port: Option<u16>,
    cors_origin: Option<String>,
    secure_cookies: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct SessionSection {
    duration_hours: Option<i64>,
}

// ==================== Resolved settings ====================

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub database_path: PathBuf,
    pub port: u16,
    pub cors_origin: String,
    pub secure_cookies: bool,
    pub session_duration_hours: i64,
}

impl Settings {
    /// Full server bind address
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", SERVER_ADDR, self.port)
    }

    pub fn cookie_settings(&self) -> CookieSettings {
        CookieSettings {
            secure: self.secure_cookies,
            duration_hours: self.session_duration_hours,
        }
    }
}

/// Load settings from `config.toml`, `.env`/environment and defaults
pub fn load_settings() -> Settings {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let file = match std::fs::read_to_string(CONFIG_FILE) {
        Ok(contents) => match toml::from_str::<FileConfig>(&contents) {
            Ok(config) => {
                tracing::info!("Loaded {}", CONFIG_FILE);
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring invalid {}: {}", CONFIG_FILE, e);
                FileConfig::default()
            }
        },
        Err(_) => FileConfig::default(),
    };

    resolve(file, |key| std::env::var(key).ok())
}

/// Merge file config with environment lookups and defaults
fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Settings {
    let database = file.database.unwrap_or_default();
    let server = file.server.unwrap_or_default();
    let session = file.session.unwrap_or_default();

    let database_path = database
        .path
        .or_else(|| env("DATABASE_PATH"))
        .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());

    let port = server
        .port
        .or_else(|| env("SERVER_PORT").and_then(|v| v.parse().ok()))
        .unwrap_or(DEFAULT_SERVER_PORT);

    let cors_origin = server
        .cors_origin
        .or_else(|| env("CORS_ORIGIN"))
        .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());

    let secure_cookies = server
        .secure_cookies
        .or_else(|| env("SECURE_COOKIES").and_then(|v| parse_bool(&v)))
        .unwrap_or(false);

    let session_duration_hours = session
        .duration_hours
        .or_else(|| env("SESSION_DURATION_HOURS").and_then(|v| v.parse().ok()))
        .filter(|hours| *hours > 0)
        .unwrap_or(DEFAULT_SESSION_DURATION_HOURS);

    tracing::info!("Using database at {}", database_path);

    Settings {
        database_path: PathBuf::from(database_path),
        port,
        cors_origin,
        secure_cookies,
        session_duration_hours,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let settings = resolve(FileConfig::default(), |_| None);
        assert_eq!(settings.database_path, PathBuf::from(DEFAULT_DATABASE_PATH));
        assert_eq!(settings.port, DEFAULT_SERVER_PORT);
        assert_eq!(settings.cors_origin, DEFAULT_CORS_ORIGIN);
        assert!(!settings.secure_cookies);
        assert_eq!(settings.session_duration_hours, DEFAULT_SESSION_DURATION_HOURS);
        assert_eq!(settings.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_env_overrides_defaults() {
        let env = env_from(&[
            ("DATABASE_PATH", "/tmp/jobs.db"),
            ("SERVER_PORT", "8080"),
            ("SECURE_COOKIES", "true"),
            ("SESSION_DURATION_HOURS", "12"),
        ]);
        let settings = resolve(FileConfig::default(), |k| env.get(k).cloned());
        assert_eq!(settings.database_path, PathBuf::from("/tmp/jobs.db"));
        assert_eq!(settings.port, 8080);
        assert!(settings.secure_cookies);
        assert_eq!(settings.session_duration_hours, 12);
    }

    #[test]
    fn test_file_overrides_env() {
        let file: FileConfig = toml::from_str(
            r#"
            [database]
            path = "from_file.db"

            [server]
            port = 9000
            cors_origin = "https://jobs.example.com"
            "#,
        )
        .unwrap();
        let env = env_from(&[("DATABASE_PATH", "from_env.db"), ("SERVER_PORT", "8080")]);

        let settings = resolve(file, |k| env.get(k).cloned());
        assert_eq!(settings.database_path, PathBuf::from("from_file.db"));
        assert_eq!(settings.port, 9000);
        assert_eq!(settings.cors_origin, "https://jobs.example.com");
    }

    #[test]
    fn test_invalid_env_values_fall_back() {
        let env = env_from(&[
            ("SERVER_PORT", "not-a-port"),
            ("SECURE_COOKIES", "maybe"),
            ("SESSION_DURATION_HOURS", "-5"),
        ]);
        let settings = resolve(FileConfig::default(), |k| env.get(k).cloned());
        assert_eq!(settings.port, DEFAULT_SERVER_PORT);
        assert!(!settings.secure_cookies);
        assert_eq!(settings.session_duration_hours, DEFAULT_SESSION_DURATION_HOURS);
    }

    #[test]
    fn test_cookie_settings_follow_settings() {
        let env = env_from(&[("SECURE_COOKIES", "1"), ("SESSION_DURATION_HOURS", "3")]);
        let cookies = resolve(FileConfig::default(), |k| env.get(k).cloned()).cookie_settings();
        assert!(cookies.secure);
        assert_eq!(cookies.duration_hours, 3);
    }
}

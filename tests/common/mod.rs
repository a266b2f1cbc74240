//! Shared harness: a migrated database in a temp dir behind the full router.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use rusqlite::Connection;
use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;
use tower::ServiceExt;

use job_corner::db;
use job_corner::routes;
use job_corner::session::SESSION_COOKIE_NAME;
use job_corner::state::{AppState, CookieSettings};

pub struct TestApp {
    _temp: TempDir,
    db_path: PathBuf,
    router: Router,
}

/// Status, `name=value` of a session cookie set by the response, and JSON body
pub struct TestResponse {
    pub status: StatusCode,
    pub session_cookie: Option<String>,
    pub body: Value,
}

impl TestApp {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let db_path = temp.path().join("job_corner.db");
        let pool = db::init_db(&db_path).unwrap();
        let state = AppState::new(
            pool,
            CookieSettings {
                secure: false,
                duration_hours: 1,
            },
        );

        Self {
            _temp: temp,
            db_path,
            router: routes::router(state),
        }
    }

    /// Separate connection for asserting on table contents
    pub fn conn(&self) -> Connection {
        Connection::open(&self.db_path).unwrap()
    }

    pub fn count(&self, table: &str) -> i64 {
        self.conn()
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
            .unwrap()
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(b) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_string(&b).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let session_cookie = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter(|v| v.starts_with(&format!("{}=", SESSION_COOKIE_NAME)))
            .filter_map(|v| v.split(';').next())
            .map(|v| v.to_string())
            .next();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            session_cookie,
            body,
        }
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.send(Method::GET, uri, None, cookie).await
    }

    pub async fn post(&self, uri: &str, body: Value, cookie: Option<&str>) -> TestResponse {
        self.send(Method::POST, uri, Some(body), cookie).await
    }

    pub async fn register_employee(&self, email: &str) -> TestResponse {
        self.post(
            "/register",
            json!({
                "email": email,
                "password": "p",
                "user_type": "employee",
                "name": "A",
                "skills": "go",
            }),
            None,
        )
        .await
    }

    pub async fn register_company(&self, email: &str, company_name: &str) -> TestResponse {
        self.post(
            "/register",
            json!({
                "email": email,
                "password": "p",
                "user_type": "company",
                "name": "Owner",
                "companyName": company_name,
                "industry": "Software",
                "companyDescription": "We build things",
            }),
            None,
        )
        .await
    }

    /// Log in with password "p", returns (session cookie, account id)
    pub async fn login(&self, email: &str) -> (String, i64) {
        let response = self
            .post("/login", json!({ "email": email, "password": "p" }), None)
            .await;
        assert_eq!(response.status, StatusCode::OK);
        let cookie = response.session_cookie.expect("login sets a session cookie");
        let user_id = response.body["user"]["user_id"].as_i64().unwrap();
        (cookie, user_id)
    }

    /// Register + log in a company and post one job, returns (company cookie, job id)
    pub async fn company_with_job(&self, title: &str) -> (String, i64) {
        self.register_company("hr@acme.com", "Acme").await;
        let (cookie, _) = self.login("hr@acme.com").await;

        let response = self
            .post("/company/post-job", json!({ "title": title }), Some(&cookie))
            .await;
        assert_eq!(response.status, StatusCode::CREATED);

        let jobs = self.get("/jobs", Some(&cookie)).await;
        let job_id = jobs.body.as_array().unwrap().last().unwrap()["id"]
            .as_i64()
            .unwrap();
        (cookie, job_id)
    }
}

//! Router and HTTP layers.

use axum::{
  http::{header, HeaderValue, Method},
  routing::{delete, get, post},
  Router,
};
use tower_http::cors::CorsLayer;

use crate::{auth, handlers, state::AppState};

/// All API routes with state attached
pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/register", post(auth::register))
    .route("/login", post(auth::login))
    .route("/logout", post(auth::logout))
    .route("/profile", get(handlers::profile))
    .route("/jobs", get(handlers::list_jobs))
    .route("/job/{id}", get(handlers::get_job))
    .route("/job-applicants/{id}", get(handlers::job_applicants))
    .route("/company/post-job", post(handlers::post_job))
    .route("/company/delete-job/{id}", delete(handlers::delete_job))
    .route("/apply", post(handlers::apply))
    .route("/applied-jobs", get(handlers::applied_jobs))
    .with_state(state)
}

/// CORS for a single credentialed frontend origin
pub fn cors_layer(origin: &str) -> Result<CorsLayer, header::InvalidHeaderValue> {
  Ok(
    CorsLayer::new()
      .allow_origin(HeaderValue::from_str(origin)?)
      .allow_credentials(true)
      .allow_methods([Method::GET, Method::POST, Method::DELETE])
      .allow_headers([header::CONTENT_TYPE]),
  )
}

pub mod applications;
pub mod jobs;
pub mod profile;

pub use applications::{applied_jobs, apply};
pub use jobs::{delete_job, get_job, job_applicants, list_jobs, post_job};
pub use profile::profile;

/// Treat absent and blank request fields alike
pub fn present(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.trim().is_empty())
}

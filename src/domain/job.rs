use serde::{Deserialize, Serialize};

/// Job posting joined with the posting company's name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
  pub id: i64,
  pub title: String,
  pub company_id: i64,
  pub skills: Option<String>,
  pub education: Option<String>,
  pub working_mode: Option<String>,
  pub working_hours: Option<String>,
  pub experience: Option<String>,
  pub package: Option<String>,
  pub location: Option<String>,
  pub company_name: Option<String>,
}

/// Fields of a job posting before insertion. `company_id` comes from the session.
#[derive(Debug, Clone, Default)]
pub struct NewJob {
  pub title: String,
  pub skills: Option<String>,
  pub education: Option<String>,
  pub working_mode: Option<String>,
  pub working_hours: Option<String>,
  pub experience: Option<String>,
  pub package: Option<String>,
  pub location: Option<String>,
}

/// One row of a job seeker's application history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedJob {
  pub job_id: i64,
  pub title: String,
  pub location: Option<String>,
  pub package: Option<String>,
  pub company_name: Option<String>,
}

/// Job seeker who applied to a job, as shown to the posting company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
  /// Account id of the applicant
  pub id: i64,
  pub name: Option<String>,
  pub skills: Option<String>,
  pub education: Option<String>,
  pub experience: Option<String>,
  pub location: Option<String>,
  pub date_of_birth: Option<String>,
}

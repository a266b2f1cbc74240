use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

/// Account classification. Decides which profile table and which routes apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
  /// Job seeker
  Employee,
  /// Job provider
  Company,
}

impl UserType {
  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "employee" => Some(Self::Employee),
      "company" => Some(Self::Company),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Employee => "employee",
      Self::Company => "company",
    }
  }
}

impl ToSql for UserType {
  fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
    Ok(ToSqlOutput::from(self.as_str()))
  }
}

impl FromSql for UserType {
  fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
    let s = value.as_str()?;
    Self::from_str(s).ok_or_else(|| FromSqlError::Other(format!("unknown user_type '{}'", s).into()))
  }
}

/// Row of the `accounts` table
#[derive(Debug, Clone)]
pub struct Account {
  pub id: i64,
  pub email: String,
  pub password_hash: String,
  pub user_type: UserType,
}

/// Job seeker profile, 1:1 with an employee account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
  pub name: Option<String>,
  pub skills: Option<String>,
  pub education: Option<String>,
  pub experience: Option<String>,
  pub location: Option<String>,
  pub date_of_birth: Option<String>,
}

/// Company profile, 1:1 with a company account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
  pub name: Option<String>,
  pub company_name: Option<String>,
  pub industry: Option<String>,
  pub company_description: Option<String>,
}

/// Role-specific profile created alongside an account
#[derive(Debug, Clone, PartialEq)]
pub enum Profile {
  Employee(EmployeeProfile),
  Company(CompanyProfile),
}

impl Profile {
  pub fn user_type(&self) -> UserType {
    match self {
      Self::Employee(_) => UserType::Employee,
      Self::Company(_) => UserType::Company,
    }
  }
}

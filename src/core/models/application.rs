use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub i64);

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationType {
    Intern,
    Volunteer,
}

impl ApplicationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationType::Intern => "intern",
            ApplicationType::Volunteer => "volunteer",
        }
    }
}

impl FromStr for ApplicationType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "intern" => Ok(ApplicationType::Intern),
            "volunteer" => Ok(ApplicationType::Volunteer),
            _ => Err(Error::Validation(format!("type must be one of intern, volunteer (got {s:?})"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl FromStr for ApplicationStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "approved" => Ok(ApplicationStatus::Approved),
            "rejected" => Ok(ApplicationStatus::Rejected),
            _ => Err(Error::Validation(format!("status must be one of pending, approved, rejected (got {s:?})"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Education {
    HighSchool,
    Undergraduate,
    Graduate,
    PostGraduate,
    Other,
}

impl Education {
    pub fn as_str(&self) -> &'static str {
        match self {
            Education::HighSchool => "high-school",
            Education::Undergraduate => "undergraduate",
            Education::Graduate => "graduate",
            Education::PostGraduate => "post-graduate",
            Education::Other => "other",
        }
    }
}

impl FromStr for Education {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high-school" => Ok(Education::HighSchool),
            "undergraduate" => Ok(Education::Undergraduate),
            "graduate" => Ok(Education::Graduate),
            "post-graduate" => Ok(Education::PostGraduate),
            "other" => Ok(Education::Other),
            _ => Err(Error::Validation(format!(
                "education must be one of high-school, undergraduate, graduate, post-graduate, other (got {s:?})"
            ))),
        }
    }
}

/// Education as recorded on a stored row.
///
/// Rows written before submissions were validated may hold any text here,
/// including the form's empty default. Those values are carried through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredEducation {
    Known(Education),
    Unrecognized(String),
}

impl StoredEducation {
    pub fn as_str(&self) -> &str {
        match self {
            StoredEducation::Known(e) => e.as_str(),
            StoredEducation::Unrecognized(s) => s,
        }
    }
}

impl From<Education> for StoredEducation {
    fn from(e: Education) -> Self {
        StoredEducation::Known(e)
    }
}

impl From<String> for StoredEducation {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(e) => StoredEducation::Known(e),
            Err(_) => StoredEducation::Unrecognized(s),
        }
    }
}

/// Presentation form of a stored application.
///
/// Every field except the two timestamps is camelCase on the wire. Fields the
/// store left empty stay `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: ApplicationId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub education: Option<StoredEducation>,
    pub experience: Option<String>,
    pub motivation: Option<String>,
    pub skills: Option<String>,
    pub availability: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub emergency_phone: Option<String>,
    #[serde(rename = "type")]
    pub type_: ApplicationType,
    pub status: ApplicationStatus,
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updated_at")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Storage form: one row of the `applications` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRow {
    pub id: ApplicationId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub education: Option<StoredEducation>,
    pub experience: Option<String>,
    pub motivation: Option<String>,
    pub skills: Option<String>,
    pub availability: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub emergency_phone: Option<String>,
    #[serde(rename = "type")]
    pub type_: ApplicationType,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Storage form of a new row. `id` and the timestamps are left to the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationInsert {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: i32,
    pub education: Education,
    pub experience: String,
    pub motivation: String,
    pub skills: String,
    pub availability: String,
    pub address: String,
    pub emergency_contact: String,
    pub emergency_phone: String,
    #[serde(rename = "type")]
    pub type_: ApplicationType,
    pub status: ApplicationStatus,
}

/// Age as submitted by a form: either a JSON number or the raw input text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AgeInput {
    Number(i64),
    Text(String),
}

/// A registration submission in presentation form, before validation.
///
/// Store-assigned fields (`id`, `created_at`, `updated_at`) are not part of
/// this type and are dropped if a caller sends them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub age: Option<AgeInput>,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub motivation: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub emergency_contact: String,
    #[serde(default)]
    pub emergency_phone: String,
    #[serde(default, rename = "type")]
    pub type_: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Default)]
pub struct Query {
    pub type_eq: Option<ApplicationType>,
}

//! Job records — open positions being recruited for.

use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::dates::iso_date_option;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Draft,
    Open,
    Closed,
}

impl JobStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }

    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "DRAFT" => Some(Self::Draft),
            "OPEN" => Some(Self::Open),
            "CLOSED" => Some(Self::Closed),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Open => "Open",
            Self::Closed => "Closed",
        }
    }

    pub const ALL: [Self; 3] = [Self::Draft, Self::Open, Self::Closed];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobLevel {
    Fresher,
    Junior,
    Middle,
    Senior,
    SolutionArchitecture,
}

impl JobLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fresher => "FRESHER",
            Self::Junior => "JUNIOR",
            Self::Middle => "MIDDLE",
            Self::Senior => "SENIOR",
            Self::SolutionArchitecture => "SOLUTION_ARCHITECTURE",
        }
    }

    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "FRESHER" => Some(Self::Fresher),
            "JUNIOR" => Some(Self::Junior),
            "MIDDLE" => Some(Self::Middle),
            "SENIOR" => Some(Self::Senior),
            "SOLUTION_ARCHITECTURE" => Some(Self::SolutionArchitecture),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Fresher => "Fresher",
            Self::Junior => "Junior",
            Self::Middle => "Middle",
            Self::Senior => "Senior",
            Self::SolutionArchitecture => "Solution architecture",
        }
    }

    pub const ALL: [Self; 5] =
        [Self::Fresher, Self::Junior, Self::Middle, Self::Senior, Self::SolutionArchitecture];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, with = "iso_date_option")]
    pub start_date: Option<Date>,
    #[serde(default, with = "iso_date_option")]
    pub end_date: Option<Date>,
    pub level: JobLevel,
    pub status: JobStatus,
    #[serde(default)]
    pub working_address: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
}

/// Create/update payload. The backend assigns the id and owns status
/// transitions beyond the initial value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub title: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, with = "iso_date_option")]
    pub start_date: Option<Date>,
    #[serde(default, with = "iso_date_option")]
    pub end_date: Option<Date>,
    pub level: JobLevel,
    pub status: JobStatus,
    #[serde(default)]
    pub working_address: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
}

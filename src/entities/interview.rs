//! Interview records — scheduled sessions between candidates and
//! interviewers.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::job::{JobLevel, JobStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterviewStatus {
    New,
    Invited,
    Interviewed,
    Cancelled,
}

impl InterviewStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Invited => "INVITED",
            Self::Interviewed => "INTERVIEWED",
            Self::Cancelled => "CANCELLED",
        }
    }

    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "NEW" => Some(Self::New),
            "INVITED" => Some(Self::Invited),
            "INTERVIEWED" => Some(Self::Interviewed),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Invited => "Invited",
            Self::Interviewed => "Interviewed",
            Self::Cancelled => "Cancelled",
        }
    }

    pub const ALL: [Self; 4] = [Self::New, Self::Invited, Self::Interviewed, Self::Cancelled];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterviewResult {
    #[serde(rename = "NA")]
    Na,
    #[serde(rename = "PASSED")]
    Passed,
    #[serde(rename = "FAILED")]
    Failed,
}

impl InterviewResult {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Na => "NA",
            Self::Passed => "PASSED",
            Self::Failed => "FAILED",
        }
    }

    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "NA" => Some(Self::Na),
            "PASSED" => Some(Self::Passed),
            "FAILED" => Some(Self::Failed),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Na => "N/A",
            Self::Passed => "Passed",
            Self::Failed => "Failed",
        }
    }

    pub const ALL: [Self; 3] = [Self::Na, Self::Passed, Self::Failed];
}

/// Job fields embedded in an interview response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewJobRef {
    pub title: String,
    pub level: JobLevel,
    pub status: JobStatus,
}

/// Candidate fields embedded in an interview response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewCandidateRef {
    pub full_name: String,
    #[serde(default)]
    pub position: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: Uuid,
    pub title: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_time: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_time: Option<OffsetDateTime>,
    #[serde(default)]
    pub location: Option<String>,
    /// Absent until the interview has been held.
    #[serde(default)]
    pub result: Option<InterviewResult>,
    pub status: InterviewStatus,
    pub job: InterviewJobRef,
    pub candidate: InterviewCandidateRef,
    #[serde(default)]
    pub interviewers: Vec<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewDraft {
    pub title: String,
    pub job_id: Uuid,
    pub candidate_id: Uuid,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_time: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_time: Option<OffsetDateTime>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub interviewer_ids: Vec<Uuid>,
    #[serde(default)]
    pub note: Option<String>,
}

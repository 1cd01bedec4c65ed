//! Candidate records — applicants moving through the hiring pipeline.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::job::JobLevel;

/// Pipeline position of a candidate. The backend owns the transitions;
/// the client only filters and colors by these tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CandidateStatus {
    Open,
    WaitingForInterview,
    CancelledByInterview,
    PassedByInterview,
    FailedByInterview,
    WaitingForApproval,
    Approved,
    Rejected,
    WaitingForResponse,
    AcceptedOffer,
    DeclinedOffer,
    CancelledOffer,
    Banned,
}

impl CandidateStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::WaitingForInterview => "WAITING_FOR_INTERVIEW",
            Self::CancelledByInterview => "CANCELLED_BY_INTERVIEW",
            Self::PassedByInterview => "PASSED_BY_INTERVIEW",
            Self::FailedByInterview => "FAILED_BY_INTERVIEW",
            Self::WaitingForApproval => "WAITING_FOR_APPROVAL",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::WaitingForResponse => "WAITING_FOR_RESPONSE",
            Self::AcceptedOffer => "ACCEPTED_OFFER",
            Self::DeclinedOffer => "DECLINED_OFFER",
            Self::CancelledOffer => "CANCELLED_OFFER",
            Self::Banned => "BANNED",
        }
    }

    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// Human text for the status filter dropdown.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::WaitingForInterview => "Waiting for interview",
            Self::CancelledByInterview => "Cancelled by interview",
            Self::PassedByInterview => "Passed interview",
            Self::FailedByInterview => "Failed interview",
            Self::WaitingForApproval => "Waiting for approval",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::WaitingForResponse => "Waiting for response",
            Self::AcceptedOffer => "Accepted offer",
            Self::DeclinedOffer => "Declined offer",
            Self::CancelledOffer => "Cancelled offer",
            Self::Banned => "Banned",
        }
    }

    pub const ALL: [Self; 13] = [
        Self::Open,
        Self::WaitingForInterview,
        Self::CancelledByInterview,
        Self::PassedByInterview,
        Self::FailedByInterview,
        Self::WaitingForApproval,
        Self::Approved,
        Self::Rejected,
        Self::WaitingForResponse,
        Self::AcceptedOffer,
        Self::DeclinedOffer,
        Self::CancelledOffer,
        Self::Banned,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Current position, e.g. "Backend Developer".
    #[serde(default)]
    pub position: Option<String>,
    /// Display name of the assigned recruiter.
    #[serde(default)]
    pub recruiter: Option<String>,
    #[serde(default)]
    pub recruiter_id: Option<Uuid>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub highest_level: Option<JobLevel>,
    pub status: CandidateStatus,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDraft {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub recruiter_id: Option<Uuid>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub highest_level: Option<JobLevel>,
    #[serde(default)]
    pub note: Option<String>,
}

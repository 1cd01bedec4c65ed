//! Offer records — compensation offers extended to candidates.

use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use super::job::JobLevel;
use crate::dates::iso_date_option;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferStatus {
    WaitingForApproval,
    Approved,
    Rejected,
    WaitingForResponse,
    Accepted,
    Declined,
    // Wire tag shared with the candidate pipeline.
    #[serde(rename = "CANCELLED_OFFER")]
    Cancelled,
}

impl OfferStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WaitingForApproval => "WAITING_FOR_APPROVAL",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::WaitingForResponse => "WAITING_FOR_RESPONSE",
            Self::Accepted => "ACCEPTED",
            Self::Declined => "DECLINED",
            Self::Cancelled => "CANCELLED_OFFER",
        }
    }

    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::WaitingForApproval => "Waiting for approval",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::WaitingForResponse => "Waiting for response",
            Self::Accepted => "Accepted",
            Self::Declined => "Declined",
            Self::Cancelled => "Cancelled",
        }
    }

    pub const ALL: [Self; 7] = [
        Self::WaitingForApproval,
        Self::Approved,
        Self::Rejected,
        Self::WaitingForResponse,
        Self::Accepted,
        Self::Declined,
        Self::Cancelled,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub candidate_name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub level: Option<JobLevel>,
    /// Display name of the manager who approves the offer.
    #[serde(default)]
    pub approver: Option<String>,
    #[serde(default, with = "iso_date_option")]
    pub contract_from: Option<Date>,
    #[serde(default, with = "iso_date_option")]
    pub contract_to: Option<Date>,
    #[serde(default)]
    pub basic_salary: Option<f64>,
    pub status: OfferStatus,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferDraft {
    pub candidate_id: Uuid,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub level: Option<JobLevel>,
    #[serde(default)]
    pub approver_id: Option<Uuid>,
    #[serde(default, with = "iso_date_option")]
    pub contract_from: Option<Date>,
    #[serde(default, with = "iso_date_option")]
    pub contract_to: Option<Date>,
    #[serde(default)]
    pub basic_salary: Option<f64>,
    #[serde(default)]
    pub note: Option<String>,
}

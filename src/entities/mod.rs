//! Typed entity records.
//!
//! The original screens passed duck-typed payloads around; here every
//! entity has an explicit field list and a status enum carrying both its
//! wire tag and the display label the filter dropdowns use.

pub mod candidate;
pub mod employee;
pub mod interview;
pub mod job;
pub mod offer;

pub use candidate::{Candidate, CandidateDraft, CandidateStatus};
pub use employee::{Employee, EmployeeDraft};
pub use interview::{Interview, InterviewDraft, InterviewResult, InterviewStatus};
pub use job::{Job, JobDraft, JobLevel, JobStatus};
pub use offer::{Offer, OfferDraft, OfferStatus};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id/name pair returned by the lookup endpoints (departments, skills,
/// benefits, levels, roles) and fed into form selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupItem {
    pub id: Uuid,
    pub name: String,
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

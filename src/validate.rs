//! Pre-submission form validation.
//!
//! Validation failures are keyed by field name so the form layer can render
//! them inline; a non-empty error set blocks submission before any network
//! call is made.

use std::collections::BTreeMap;

use crate::entities::{CandidateDraft, EmployeeDraft, InterviewDraft, JobDraft, OfferDraft};
use crate::net::auth::Credentials;

/// Field name → message. Ordered for stable rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("validation failed: {0:?}")]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_owned()).or_insert_with(|| message.into());
    }

    #[must_use]
    pub fn message(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns the collected field errors.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

fn require(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(field, format!("{field} is required"));
    }
}

fn check_email(errors: &mut ValidationErrors, field: &str, value: &str) {
    let valid = value
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !valid {
        errors.push(field, "must be a valid email address");
    }
}

fn check_phone(errors: &mut ValidationErrors, field: &str, value: &str) {
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if digits < 9 {
        errors.push(field, "must contain at least 9 digits");
    }
}

// =============================================================================
// PER-ENTITY RULES
// =============================================================================

/// # Errors
///
/// Returns field-keyed messages when the draft cannot be submitted.
pub fn validate_job(draft: &JobDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    require(&mut errors, "title", &draft.title);
    if draft.skills.is_empty() {
        errors.push("skills", "at least one skill is required");
    }
    if let (Some(start), Some(end)) = (draft.start_date, draft.end_date) {
        if end < start {
            errors.push("endDate", "end date must not be before start date");
        }
    }
    errors.into_result()
}

/// # Errors
///
/// Returns field-keyed messages when the draft cannot be submitted.
pub fn validate_candidate(draft: &CandidateDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    require(&mut errors, "fullName", &draft.full_name);
    require(&mut errors, "email", &draft.email);
    if !draft.email.trim().is_empty() {
        check_email(&mut errors, "email", &draft.email);
    }
    if let Some(phone) = &draft.phone_number {
        check_phone(&mut errors, "phoneNumber", phone);
    }
    errors.into_result()
}

/// # Errors
///
/// Returns field-keyed messages when the draft cannot be submitted.
pub fn validate_interview(draft: &InterviewDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    require(&mut errors, "title", &draft.title);
    if draft.interviewer_ids.is_empty() {
        errors.push("interviewerIds", "at least one interviewer is required");
    }
    match (draft.start_time, draft.end_time) {
        (Some(start), Some(end)) if end <= start => {
            errors.push("endTime", "end time must be after start time");
        }
        (None, _) => errors.push("startTime", "startTime is required"),
        _ => {}
    }
    errors.into_result()
}

/// # Errors
///
/// Returns field-keyed messages when the draft cannot be submitted.
pub fn validate_offer(draft: &OfferDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if let Some(salary) = draft.basic_salary {
        if salary <= 0.0 {
            errors.push("basicSalary", "salary must be positive");
        }
    } else {
        errors.push("basicSalary", "basicSalary is required");
    }
    if let (Some(from), Some(to)) = (draft.contract_from, draft.contract_to) {
        if to < from {
            errors.push("contractTo", "contract end must not be before contract start");
        }
    }
    errors.into_result()
}

/// # Errors
///
/// Returns field-keyed messages when the draft cannot be submitted.
pub fn validate_employee(draft: &EmployeeDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    require(&mut errors, "fullName", &draft.full_name);
    require(&mut errors, "email", &draft.email);
    if !draft.email.trim().is_empty() {
        check_email(&mut errors, "email", &draft.email);
    }
    if draft.role_ids.is_empty() {
        errors.push("roleIds", "at least one role is required");
    }
    errors.into_result()
}

/// # Errors
///
/// Returns field-keyed messages when the credentials cannot be submitted.
pub fn validate_credentials(credentials: &Credentials) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    require(&mut errors, "email", &credentials.email);
    if credentials.password.is_empty() {
        errors.push("password", "password is required");
    }
    errors.into_result()
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;

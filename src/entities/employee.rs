//! Employee records — internal staff accounts (ADMIN-only screen).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    /// Comma-joined role tags as the backend renders them, e.g.
    /// `"MANAGER, RECRUITER"`.
    pub role_name: String,
    pub active: bool,
}

impl Employee {
    /// True when the employee carries the given role tag. Compares whole
    /// comma-separated tags, so a tag embedding another never matches.
    #[must_use]
    pub fn has_role(&self, role: crate::auth::Role) -> bool {
        self.role_name.split(',').any(|tag| tag.trim() == role.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub department_id: Option<Uuid>,
    pub role_ids: Vec<Uuid>,
    pub active: bool,
}

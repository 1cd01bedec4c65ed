//! Employees endpoints (ADMIN-only screen).

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::ApiClient;
use crate::controller::PageFetcher;
use crate::entities::{Employee, EmployeeDraft};
use crate::error::ApiError;
use crate::page::{PageQuery, PageResult};

/// The employee screen searches by a single free-text keyword.
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    pub keyword: String,
}

impl EmployeeFilter {
    #[must_use]
    pub fn to_filters(&self) -> BTreeMap<String, String> {
        let mut filters = BTreeMap::new();
        if !self.keyword.is_empty() {
            filters.insert("keyword".to_owned(), self.keyword.clone());
        }
        filters
    }
}

pub struct EmployeesApi {
    api: Arc<ApiClient>,
}

impl EmployeesApi {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Full list, used to populate recruiter/interviewer selects.
    ///
    /// # Errors
    ///
    /// Returns the transport or backend error.
    pub async fn get_all(&self) -> Result<Vec<Employee>, ApiError> {
        self.api.get_json("employees", &[]).await
    }

    /// # Errors
    ///
    /// `NotFound` when the id does not exist.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Employee, ApiError> {
        self.api.get_json(&format!("employees/{id}"), &[]).await
    }

    /// # Errors
    ///
    /// Returns the transport or backend error.
    pub async fn search(&self, query: &PageQuery) -> Result<PageResult<Employee>, ApiError> {
        self.api.search_page("employees/searchByKeyword", query).await
    }

    /// # Errors
    ///
    /// `Rejected` when the backend refuses the draft.
    pub async fn create(&self, draft: &EmployeeDraft) -> Result<Employee, ApiError> {
        self.api.post_json("employees", draft).await
    }

    /// # Errors
    ///
    /// `NotFound` or `Rejected` depending on what the backend objects to.
    pub async fn update(&self, id: Uuid, draft: &EmployeeDraft) -> Result<Employee, ApiError> {
        self.api.put_json(&format!("employees/{id}"), draft).await
    }

    /// # Errors
    ///
    /// `NotFound` when the id does not exist.
    pub async fn remove(&self, id: Uuid) -> Result<(), ApiError> {
        self.api.delete(&format!("employees/{id}")).await
    }
}

#[async_trait]
impl PageFetcher<Employee> for EmployeesApi {
    async fn fetch_page(&self, query: &PageQuery) -> Result<PageResult<Employee>, ApiError> {
        self.search(query).await
    }
}

//! Jobs endpoints.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::ApiClient;
use crate::controller::PageFetcher;
use crate::entities::{Job, JobDraft, JobLevel, JobStatus};
use crate::error::ApiError;
use crate::page::{PageQuery, PageResult};

/// Typed filter for the job list screen.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub title: String,
    pub status: Option<JobStatus>,
    pub level: Option<JobLevel>,
}

impl JobFilter {
    /// Flatten into the controller's filter mapping.
    #[must_use]
    pub fn to_filters(&self) -> BTreeMap<String, String> {
        let mut filters = BTreeMap::new();
        if !self.title.is_empty() {
            filters.insert("title".to_owned(), self.title.clone());
        }
        if let Some(status) = self.status {
            filters.insert("status".to_owned(), status.as_str().to_owned());
        }
        if let Some(level) = self.level {
            filters.insert("level".to_owned(), level.as_str().to_owned());
        }
        filters
    }
}

pub struct JobsApi {
    api: Arc<ApiClient>,
}

impl JobsApi {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Returns the transport or backend error.
    pub async fn get_all(&self) -> Result<Vec<Job>, ApiError> {
        self.api.get_json("jobs", &[]).await
    }

    /// # Errors
    ///
    /// `NotFound` when the id does not exist.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Job, ApiError> {
        self.api.get_json(&format!("jobs/{id}"), &[]).await
    }

    /// # Errors
    ///
    /// Returns the transport or backend error.
    pub async fn search(&self, query: &PageQuery) -> Result<PageResult<Job>, ApiError> {
        self.api.search_page("jobs/search", query).await
    }

    /// # Errors
    ///
    /// `Rejected` when the backend refuses the draft.
    pub async fn create(&self, draft: &JobDraft) -> Result<Job, ApiError> {
        self.api.post_json("jobs", draft).await
    }

    /// # Errors
    ///
    /// `NotFound` or `Rejected` depending on what the backend objects to.
    pub async fn update(&self, id: Uuid, draft: &JobDraft) -> Result<Job, ApiError> {
        self.api.put_json(&format!("jobs/{id}"), draft).await
    }

    /// # Errors
    ///
    /// `NotFound` when the id does not exist.
    pub async fn remove(&self, id: Uuid) -> Result<(), ApiError> {
        self.api.delete(&format!("jobs/{id}")).await
    }

    /// Paged search restricted to one status, e.g. the "open positions"
    /// picker on the candidate form.
    ///
    /// # Errors
    ///
    /// Returns the transport or backend error.
    pub async fn search_by_status(
        &self,
        status: JobStatus,
        query: &PageQuery,
    ) -> Result<PageResult<Job>, ApiError> {
        let mut pairs = query.to_query_pairs();
        pairs.push(("status".to_owned(), status.as_str().to_owned()));
        self.api.get_json("jobs/status", &pairs).await
    }

    /// Status values the backend currently accepts for filtering.
    ///
    /// # Errors
    ///
    /// Returns the transport or backend error.
    pub async fn statuses(&self) -> Result<Vec<JobStatus>, ApiError> {
        self.api.get_json("jobs/statuses", &[]).await
    }
}

#[async_trait]
impl PageFetcher<Job> for JobsApi {
    async fn fetch_page(&self, query: &PageQuery) -> Result<PageResult<Job>, ApiError> {
        self.search(query).await
    }
}

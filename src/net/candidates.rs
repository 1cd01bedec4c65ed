//! Candidates endpoints.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::ApiClient;
use crate::controller::PageFetcher;
use crate::entities::{Candidate, CandidateDraft, CandidateStatus};
use crate::error::ApiError;
use crate::page::{PageQuery, PageResult};

/// Typed filter for the candidate list screen.
#[derive(Debug, Clone, Default)]
pub struct CandidateFilter {
    pub full_name: String,
    pub status: Option<CandidateStatus>,
    pub recruiter_id: Option<Uuid>,
}

impl CandidateFilter {
    #[must_use]
    pub fn to_filters(&self) -> BTreeMap<String, String> {
        let mut filters = BTreeMap::new();
        if !self.full_name.is_empty() {
            filters.insert("fullName".to_owned(), self.full_name.clone());
        }
        if let Some(status) = self.status {
            filters.insert("status".to_owned(), status.as_str().to_owned());
        }
        if let Some(recruiter_id) = self.recruiter_id {
            filters.insert("recruiterId".to_owned(), recruiter_id.to_string());
        }
        filters
    }
}

pub struct CandidatesApi {
    api: Arc<ApiClient>,
}

impl CandidatesApi {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Returns the transport or backend error.
    pub async fn get_all(&self) -> Result<Vec<Candidate>, ApiError> {
        self.api.get_json("candidates", &[]).await
    }

    /// # Errors
    ///
    /// `NotFound` when the id does not exist.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Candidate, ApiError> {
        self.api.get_json(&format!("candidates/{id}"), &[]).await
    }

    /// # Errors
    ///
    /// Returns the transport or backend error.
    pub async fn search(&self, query: &PageQuery) -> Result<PageResult<Candidate>, ApiError> {
        self.api.search_page("candidates/search", query).await
    }

    /// # Errors
    ///
    /// `Rejected` when the backend refuses the draft.
    pub async fn create(&self, draft: &CandidateDraft) -> Result<Candidate, ApiError> {
        self.api.post_json("candidates", draft).await
    }

    /// # Errors
    ///
    /// `NotFound` or `Rejected` depending on what the backend objects to.
    pub async fn update(&self, id: Uuid, draft: &CandidateDraft) -> Result<Candidate, ApiError> {
        self.api.put_json(&format!("candidates/{id}"), draft).await
    }

    /// # Errors
    ///
    /// `NotFound` when the id does not exist.
    pub async fn remove(&self, id: Uuid) -> Result<(), ApiError> {
        self.api.delete(&format!("candidates/{id}")).await
    }

    /// Transition the pipeline status without a full update payload.
    ///
    /// # Errors
    ///
    /// `Rejected` when the backend refuses the transition.
    pub async fn update_status(&self, id: Uuid, status: CandidateStatus) -> Result<Candidate, ApiError> {
        self.api
            .patch_json(
                &format!("candidates/{id}/status"),
                &[("status".to_owned(), status.as_str().to_owned())],
            )
            .await
    }
}

#[async_trait]
impl PageFetcher<Candidate> for CandidatesApi {
    async fn fetch_page(&self, query: &PageQuery) -> Result<PageResult<Candidate>, ApiError> {
        self.search(query).await
    }
}

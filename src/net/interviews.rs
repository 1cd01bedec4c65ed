//! Interviews endpoints.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::ApiClient;
use crate::controller::PageFetcher;
use crate::entities::{Interview, InterviewDraft, InterviewResult, InterviewStatus};
use crate::error::ApiError;
use crate::page::{PageQuery, PageResult};

/// Typed filter for the interview list screen.
#[derive(Debug, Clone, Default)]
pub struct InterviewFilter {
    pub title: String,
    pub status: Option<InterviewStatus>,
    pub interviewer_id: Option<Uuid>,
}

impl InterviewFilter {
    #[must_use]
    pub fn to_filters(&self) -> BTreeMap<String, String> {
        let mut filters = BTreeMap::new();
        if !self.title.is_empty() {
            filters.insert("title".to_owned(), self.title.clone());
        }
        if let Some(status) = self.status {
            filters.insert("status".to_owned(), status.as_str().to_owned());
        }
        if let Some(interviewer_id) = self.interviewer_id {
            filters.insert("interviewerId".to_owned(), interviewer_id.to_string());
        }
        filters
    }
}

pub struct InterviewsApi {
    api: Arc<ApiClient>,
}

impl InterviewsApi {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Full list, used by the dashboard aggregation.
    ///
    /// # Errors
    ///
    /// Returns the transport or backend error.
    pub async fn get_all(&self) -> Result<Vec<Interview>, ApiError> {
        self.api.get_json("interviews", &[]).await
    }

    /// # Errors
    ///
    /// `NotFound` when the id does not exist.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Interview, ApiError> {
        self.api.get_json(&format!("interviews/{id}"), &[]).await
    }

    /// # Errors
    ///
    /// Returns the transport or backend error.
    pub async fn search(&self, query: &PageQuery) -> Result<PageResult<Interview>, ApiError> {
        self.api.search_page("interviews/search", query).await
    }

    /// # Errors
    ///
    /// `Rejected` when the backend refuses the draft.
    pub async fn create(&self, draft: &InterviewDraft) -> Result<Interview, ApiError> {
        self.api.post_json("interviews", draft).await
    }

    /// # Errors
    ///
    /// `NotFound` or `Rejected` depending on what the backend objects to.
    pub async fn update(&self, id: Uuid, draft: &InterviewDraft) -> Result<Interview, ApiError> {
        self.api.put_json(&format!("interviews/{id}"), draft).await
    }

    /// # Errors
    ///
    /// `NotFound` when the id does not exist.
    pub async fn remove(&self, id: Uuid) -> Result<(), ApiError> {
        self.api.delete(&format!("interviews/{id}")).await
    }

    /// # Errors
    ///
    /// `Rejected` when the backend refuses the transition.
    pub async fn update_status(&self, id: Uuid, status: InterviewStatus) -> Result<Interview, ApiError> {
        self.api
            .patch_json(
                &format!("interviews/{id}/status"),
                &[("status".to_owned(), status.as_str().to_owned())],
            )
            .await
    }

    /// Record the outcome after the interview has been held.
    ///
    /// # Errors
    ///
    /// `Rejected` when the backend refuses the outcome.
    pub async fn update_result_and_note(
        &self,
        id: Uuid,
        result: InterviewResult,
        note: &str,
    ) -> Result<Interview, ApiError> {
        self.api
            .patch_json(
                &format!("interviews/{id}/result"),
                &[
                    ("result".to_owned(), result.as_str().to_owned()),
                    ("note".to_owned(), note.to_owned()),
                ],
            )
            .await
    }
}

#[async_trait]
impl PageFetcher<Interview> for InterviewsApi {
    async fn fetch_page(&self, query: &PageQuery) -> Result<PageResult<Interview>, ApiError> {
        self.search(query).await
    }
}

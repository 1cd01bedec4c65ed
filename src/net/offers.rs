//! Offers endpoints.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::ApiClient;
use crate::controller::PageFetcher;
use crate::entities::{Offer, OfferDraft, OfferStatus};
use crate::error::ApiError;
use crate::page::{PageQuery, PageResult};

/// Typed filter for the offer list screen.
#[derive(Debug, Clone, Default)]
pub struct OfferFilter {
    pub candidate_name: String,
    pub status: Option<OfferStatus>,
}

impl OfferFilter {
    #[must_use]
    pub fn to_filters(&self) -> BTreeMap<String, String> {
        let mut filters = BTreeMap::new();
        if !self.candidate_name.is_empty() {
            filters.insert("candidateName".to_owned(), self.candidate_name.clone());
        }
        if let Some(status) = self.status {
            filters.insert("status".to_owned(), status.as_str().to_owned());
        }
        filters
    }
}

pub struct OffersApi {
    api: Arc<ApiClient>,
}

impl OffersApi {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Returns the transport or backend error.
    pub async fn get_all(&self) -> Result<Vec<Offer>, ApiError> {
        self.api.get_json("offers", &[]).await
    }

    /// # Errors
    ///
    /// `NotFound` when the id does not exist.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Offer, ApiError> {
        self.api.get_json(&format!("offers/{id}"), &[]).await
    }

    /// # Errors
    ///
    /// Returns the transport or backend error.
    pub async fn search(&self, query: &PageQuery) -> Result<PageResult<Offer>, ApiError> {
        self.api.search_page("offers/search", query).await
    }

    /// # Errors
    ///
    /// `Rejected` when the backend refuses the draft.
    pub async fn create(&self, draft: &OfferDraft) -> Result<Offer, ApiError> {
        self.api.post_json("offers", draft).await
    }

    /// # Errors
    ///
    /// `NotFound` or `Rejected` depending on what the backend objects to.
    pub async fn update(&self, id: Uuid, draft: &OfferDraft) -> Result<Offer, ApiError> {
        self.api.put_json(&format!("offers/{id}"), draft).await
    }

    /// # Errors
    ///
    /// `NotFound` when the id does not exist.
    pub async fn remove(&self, id: Uuid) -> Result<(), ApiError> {
        self.api.delete(&format!("offers/{id}")).await
    }

    /// Drive the approve/reject/accept/decline workflow.
    ///
    /// # Errors
    ///
    /// `Rejected` when the backend refuses the transition.
    pub async fn update_status(&self, id: Uuid, status: OfferStatus) -> Result<Offer, ApiError> {
        self.api
            .patch_json(
                &format!("offers/{id}/status"),
                &[("status".to_owned(), status.as_str().to_owned())],
            )
            .await
    }
}

#[async_trait]
impl PageFetcher<Offer> for OffersApi {
    async fn fetch_page(&self, query: &PageQuery) -> Result<PageResult<Offer>, ApiError> {
        self.search(query).await
    }
}

//! Lookup endpoints feeding form selects: departments, skills, benefits,
//! levels and assignable roles.

use std::sync::Arc;

use super::ApiClient;
use crate::entities::LookupItem;
use crate::error::ApiError;

pub struct LookupsApi {
    api: Arc<ApiClient>,
}

impl LookupsApi {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Returns the transport or backend error.
    pub async fn departments(&self) -> Result<Vec<LookupItem>, ApiError> {
        self.api.get_json("departments", &[]).await
    }

    /// # Errors
    ///
    /// Returns the transport or backend error.
    pub async fn skills(&self) -> Result<Vec<LookupItem>, ApiError> {
        self.api.get_json("skills", &[]).await
    }

    /// # Errors
    ///
    /// Returns the transport or backend error.
    pub async fn benefits(&self) -> Result<Vec<LookupItem>, ApiError> {
        self.api.get_json("benefits", &[]).await
    }

    /// # Errors
    ///
    /// Returns the transport or backend error.
    pub async fn levels(&self) -> Result<Vec<LookupItem>, ApiError> {
        self.api.get_json("levels", &[]).await
    }

    /// # Errors
    ///
    /// Returns the transport or backend error.
    pub async fn roles(&self) -> Result<Vec<LookupItem>, ApiError> {
        self.api.get_json("roles", &[]).await
    }
}

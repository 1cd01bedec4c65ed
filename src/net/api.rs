//! HTTP client for the recruitment backend.
//!
//! DESIGN
//! ======
//! A thin reqwest wrapper owning the base URL and the session storage.
//! Whenever a token is persisted, every outbound request carries
//! `Authorization: Bearer <token>` — the Rust rendition of the original
//! request interceptor. Non-success statuses are mapped to the
//! [`ApiError`] taxonomy before any body decoding happens.

use std::sync::Arc;

use reqwest::{RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::page::{PageQuery, PageResult};
use crate::session::SessionStorage;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    storage: Arc<dyn SessionStorage>,
}

impl ApiClient {
    /// Build a client for the given base URL (e.g. `http://host:8080/api`).
    ///
    /// # Errors
    ///
    /// Returns a network error if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(base_url: impl Into<String>, storage: Arc<dyn SessionStorage>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Ok(Self { http, base_url, storage })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach the persisted bearer token when present. An unreadable store
    /// degrades to an anonymous request; the backend answers 401.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.storage.load() {
            Ok(session) if session.is_authenticated() => match session.token {
                Some(token) => request.bearer_auth(token),
                None => request,
            },
            Ok(_) => request,
            Err(err) => {
                tracing::warn!(error = %err, "session storage unreadable, sending anonymous request");
                request
            }
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), body));
        }
        response.json::<T>().await.map_err(ApiError::from)
    }

    async fn read_empty(response: Response) -> Result<(), ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), body));
        }
        Ok(())
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ApiError> {
        let request = self.authorize(self.http.get(self.url(path)).query(query));
        Self::read_json(request.send().await?).await
    }

    /// GET a search endpoint with the standard `{data, page}` envelope.
    pub(crate) async fn search_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &PageQuery,
    ) -> Result<PageResult<T>, ApiError> {
        self.get_json(path, &query.to_query_pairs()).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.authorize(self.http.post(self.url(path)).json(body));
        Self::read_json(request.send().await?).await
    }

    /// POST where the response body is irrelevant (register, password
    /// flows).
    pub(crate) async fn post_empty<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let request = self.authorize(self.http.post(self.url(path)).json(body));
        Self::read_empty(request.send().await?).await
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.authorize(self.http.put(self.url(path)).json(body));
        Self::read_json(request.send().await?).await
    }

    /// PATCH with query parameters and an empty body — the shape of the
    /// status-transition endpoints.
    pub(crate) async fn patch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ApiError> {
        let request = self.authorize(self.http.patch(self.url(path)).query(query));
        Self::read_json(request.send().await?).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.authorize(self.http.delete(self.url(path)));
        Self::read_empty(request.send().await?).await
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;

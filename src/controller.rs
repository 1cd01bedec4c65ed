//! Generic paged-list controller — the state machine behind every list
//! screen.
//!
//! DESIGN
//! ======
//! The controller owns `{filters, page, size, sort}` and the last
//! successfully fetched page. "How to fetch" is injected as a
//! [`PageFetcher`], so one controller drives jobs, candidates, interviews,
//! offers and employees alike. Fetches are explicit method calls, never
//! reactive side effects, which keeps every trigger visible and testable.
//!
//! ORDERING
//! ========
//! User input can race in-flight fetches. Every dispatch takes a ticket
//! from a monotonic sequence; a response whose ticket is no longer the
//! newest (or is older than one already applied) is discarded, so the
//! displayed page always reflects the most recently requested parameters.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch leaves the last good rows and metadata untouched and
//! hands the error back for user notification; the snapshot keeps
//! reporting the page and size that produced those rows. Nothing here
//! panics into the render layer.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::ApiError;
use crate::page::{
    self, PAGE_WINDOW_LIMIT, PageInfo, PageQuery, PageResult, SortOrder, is_allowed_page_size,
};

/// How a list screen fetches one page of results.
#[async_trait]
pub trait PageFetcher<T: Send + 'static>: Send + Sync {
    async fn fetch_page(&self, query: &PageQuery) -> Result<PageResult<T>, ApiError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ListError {
    /// The requested size is not one of [`page::PAGE_SIZES`].
    #[error("page size {0} is not offered by the size selector")]
    InvalidPageSize(u32),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// What happened to a dispatched fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response was applied and is now the displayed page.
    Applied,
    /// A newer request superseded this one; the response was discarded.
    Superseded,
}

/// Read-only view of the controller for rendering.
#[derive(Debug, Clone)]
pub struct ListSnapshot<T> {
    pub rows: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub info: PageInfo,
}

impl<T> ListSnapshot<T> {
    /// Page buttons to render around the current page.
    #[must_use]
    pub fn window(&self) -> Vec<u32> {
        page::page_window(self.page, self.info.total_pages, PAGE_WINDOW_LIMIT)
    }

    /// 1-based display ordinal for the row at `index`.
    #[must_use]
    pub fn row_number(&self, index: usize) -> u64 {
        page::row_number(self.page, self.size, index)
    }

    /// Footer range label, e.g. `"6 - 10 of 23"`.
    #[must_use]
    pub fn range_label(&self) -> String {
        page::range_label(self.page, self.size, self.info.total_elements)
    }
}

struct ListState<T> {
    query: PageQuery,
    rows: Vec<T>,
    info: PageInfo,
    /// Page and size of the query that produced `rows`. A failed fetch
    /// mutates `query` but not these, so snapshots stay consistent.
    applied_page: u32,
    applied_size: u32,
    applied_seq: u64,
}

/// Generic controller behind every entity list screen.
pub struct PagedListController<T> {
    fetcher: Arc<dyn PageFetcher<T>>,
    state: Arc<RwLock<ListState<T>>>,
    seq: Arc<AtomicU64>,
}

impl<T> Clone for PagedListController<T> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            state: Arc::clone(&self.state),
            seq: Arc::clone(&self.seq),
        }
    }
}

impl<T: Send + Sync + 'static> PagedListController<T> {
    #[must_use]
    pub fn new(fetcher: Arc<dyn PageFetcher<T>>) -> Self {
        Self::with_query(fetcher, PageQuery::default())
    }

    /// Create a controller with a preconfigured query (e.g. a screen that
    /// sorts by name and starts at size 5).
    #[must_use]
    pub fn with_query(fetcher: Arc<dyn PageFetcher<T>>, query: PageQuery) -> Self {
        let size = query.size;
        let state = ListState {
            applied_page: query.page,
            applied_size: size,
            query,
            rows: Vec::new(),
            info: PageInfo { total_pages: 0, total_elements: 0, size },
            applied_seq: 0,
        };
        Self {
            fetcher,
            state: Arc::new(RwLock::new(state)),
            seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Replace the active filter mapping. Does not fetch: typing into a
    /// search box only queries once the user hits Search.
    pub fn set_filters(&self, filters: BTreeMap<String, String>) {
        self.write().query.filters = filters;
    }

    /// Set a single filter field, dropping it when the value is empty.
    pub fn set_filter(&self, field: &str, value: &str) {
        let mut state = self.write();
        if value.is_empty() {
            state.query.filters.remove(field);
        } else {
            state.query.filters.insert(field.to_owned(), value.to_owned());
        }
    }

    pub fn set_sort(&self, sort_by: &str, order: SortOrder) {
        let mut state = self.write();
        state.query.sort_by = Some(sort_by.to_owned());
        state.query.order = Some(order);
    }

    /// Explicit search: a fresh search always restarts at the first page.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the last good page stays displayed.
    pub async fn search(&self) -> Result<FetchOutcome, ListError> {
        self.dispatch(|query| query.page = 0).await
    }

    /// Go to `new_page`, clamped to `[0, total_pages - 1]`. Filters and
    /// size are unchanged.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the last good page stays displayed.
    pub async fn change_page(&self, new_page: u32) -> Result<FetchOutcome, ListError> {
        let clamped = {
            let state = self.read();
            match state.info.total_pages {
                0 => 0,
                total => new_page.min(total - 1),
            }
        };
        self.dispatch(|query| query.page = clamped).await
    }

    /// Switch page size and restart at page 0.
    ///
    /// # Errors
    ///
    /// `InvalidPageSize` without fetching when `new_size` is not offered;
    /// otherwise the fetch error.
    pub async fn change_page_size(&self, new_size: u32) -> Result<FetchOutcome, ListError> {
        if !is_allowed_page_size(new_size) {
            return Err(ListError::InvalidPageSize(new_size));
        }
        self.dispatch(|query| {
            query.size = new_size;
            query.page = 0;
        })
        .await
    }

    /// Clear all filters and fetch page 0 immediately.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the last good page stays displayed.
    pub async fn reset(&self) -> Result<FetchOutcome, ListError> {
        self.dispatch(|query| {
            query.filters.clear();
            query.page = 0;
        })
        .await
    }

    /// Re-fetch with the current parameters, e.g. after a create, update or
    /// delete. Page and filters are preserved.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the last good page stays displayed.
    pub async fn refresh(&self) -> Result<FetchOutcome, ListError> {
        self.dispatch(|_| {}).await
    }

    #[must_use]
    pub fn query(&self) -> PageQuery {
        self.read().query.clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, ListState<T>> {
        self.state
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, ListState<T>> {
        self.state
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Mutate the query, take a sequence ticket, fetch, and apply the
    /// response unless a newer dispatch has superseded it. The lock is
    /// never held across the await.
    async fn dispatch(&self, mutate: impl FnOnce(&mut PageQuery)) -> Result<FetchOutcome, ListError> {
        let (my_seq, query) = {
            let mut state = self.write();
            mutate(&mut state.query);
            let my_seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
            (my_seq, state.query.clone())
        };

        let result = self.fetcher.fetch_page(&query).await;

        let mut state = self.write();
        if self.seq.load(Ordering::SeqCst) != my_seq || state.applied_seq >= my_seq {
            tracing::debug!(seq = my_seq, "discarding superseded page response");
            return Ok(FetchOutcome::Superseded);
        }
        match result {
            Ok(page) => {
                state.rows = page.data;
                state.info = page.page;
                state.applied_page = query.page;
                state.applied_size = query.size;
                state.applied_seq = my_seq;
                Ok(FetchOutcome::Applied)
            }
            Err(err) => {
                tracing::warn!(error = %err, "page fetch failed, keeping last good page");
                Err(err.into())
            }
        }
    }
}

impl<T: Clone + Send + Sync + 'static> PagedListController<T> {
    /// Clone-out view of the last applied fetch for rendering. Page and
    /// size are the ones that produced the rows, so the view stays on the
    /// last good page even after a failed fetch.
    #[must_use]
    pub fn snapshot(&self) -> ListSnapshot<T> {
        let state = self.read();
        ListSnapshot {
            rows: state.rows.clone(),
            page: state.applied_page,
            size: state.applied_size,
            info: state.info,
        }
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;

//! Pagination primitives — queries, result envelopes, and window math.
//!
//! Pages are 0-based throughout; displayed ordinals are 1-based.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Page sizes the size selector offers.
pub const PAGE_SIZES: [u32; 5] = [5, 10, 20, 50, 100];

/// Default size for a freshly created list.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Number of page buttons shown on each side of the current page.
pub const PAGE_WINDOW_LIMIT: u32 = 3;

#[must_use]
pub fn is_allowed_page_size(size: u32) -> bool {
    PAGE_SIZES.contains(&size)
}

/// Advisory sort direction passed through to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

// =============================================================================
// QUERY
// =============================================================================

/// Input to any paged search: free-form filters plus page/size and an
/// advisory sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub filters: BTreeMap<String, String>,
    pub page: u32,
    pub size: u32,
    pub sort_by: Option<String>,
    pub order: Option<SortOrder>,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            filters: BTreeMap::new(),
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort_by: None,
            order: None,
        }
    }
}

impl PageQuery {
    /// Flatten to query-string pairs. Empty filter values are dropped so an
    /// untouched search box does not constrain the result.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .filters
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        pairs.push(("page".into(), self.page.to_string()));
        pairs.push(("size".into(), self.size.to_string()));
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sortBy".into(), sort_by.clone()));
        }
        if let Some(order) = self.order {
            pairs.push(("order".into(), order.as_str().into()));
        }
        pairs
    }
}

// =============================================================================
// RESULT
// =============================================================================

/// Page metadata returned by every search endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total_pages: u32,
    pub total_elements: u64,
    pub size: u32,
}

/// One fetched page. Constructed fresh per fetch and superseded wholesale
/// by the next; never patched incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub data: Vec<T>,
    pub page: PageInfo,
}

impl<T> PageResult<T> {
    /// An empty result with zeroed metadata.
    #[must_use]
    pub fn empty(size: u32) -> Self {
        Self { data: Vec::new(), page: PageInfo { total_pages: 0, total_elements: 0, size } }
    }
}

// =============================================================================
// WINDOW MATH
// =============================================================================

/// Page numbers to render as buttons around `page`:
/// `[max(0, page-limit), min(total_pages-1, page+limit)]` inclusive.
/// Empty when there are no pages.
#[must_use]
pub fn page_window(page: u32, total_pages: u32, limit: u32) -> Vec<u32> {
    if total_pages == 0 {
        return Vec::new();
    }
    let start = page.saturating_sub(limit);
    let end = (total_pages - 1).min(page.saturating_add(limit));
    if start > end {
        return Vec::new();
    }
    (start..=end).collect()
}

/// 1-based display ordinal for the row at `index` on the current page,
/// continuous across pages.
#[must_use]
pub fn row_number(page: u32, size: u32, index: usize) -> u64 {
    u64::from(page) * u64::from(size) + index as u64 + 1
}

/// Footer range label, e.g. `"6 - 10 of 23"`.
#[must_use]
pub fn range_label(page: u32, size: u32, total_elements: u64) -> String {
    if total_elements == 0 {
        return "0 of 0".to_owned();
    }
    let start = u64::from(page) * u64::from(size) + 1;
    let end = (u64::from(page) + 1) * u64::from(size);
    format!("{start} - {} of {total_elements}", end.min(total_elements))
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;

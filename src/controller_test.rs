use super::*;

use std::sync::Mutex;
use std::sync::atomic::AtomicBool;

// =============================================================================
// fixtures
// =============================================================================

/// Serves numbered rows out of a fixed-size dataset and records every query.
struct StubFetcher {
    total_elements: u64,
    queries: Mutex<Vec<PageQuery>>,
    fail: AtomicBool,
}

impl StubFetcher {
    fn new(total_elements: u64) -> Arc<Self> {
        Arc::new(Self { total_elements, queries: Mutex::new(Vec::new()), fail: AtomicBool::new(false) })
    }

    fn last_query(&self) -> PageQuery {
        self.queries.lock().unwrap().last().cloned().unwrap()
    }

    fn call_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl PageFetcher<String> for StubFetcher {
    async fn fetch_page(&self, query: &PageQuery) -> Result<PageResult<String>, ApiError> {
        self.queries.lock().unwrap().push(query.clone());
        if self.fail.load(Ordering::SeqCst) {
            return Err(ApiError::Network("stub offline".to_owned()));
        }
        let total = self.total_elements;
        let total_pages = u32::try_from(total.div_ceil(u64::from(query.size))).unwrap();
        let start = u64::from(query.page) * u64::from(query.size) + 1;
        let end = (u64::from(query.page) + 1) * u64::from(query.size);
        let rows = (start..=end.min(total)).map(|n| format!("row-{n}")).collect();
        Ok(PageResult {
            data: rows,
            page: PageInfo { total_pages, total_elements: total, size: query.size },
        })
    }
}

/// Blocks its first call until released; later calls return immediately.
struct GatedFetcher {
    started: tokio::sync::mpsc::UnboundedSender<u64>,
    release: tokio::sync::Notify,
    calls: AtomicU64,
}

#[async_trait]
impl PageFetcher<String> for GatedFetcher {
    async fn fetch_page(&self, _query: &PageQuery) -> Result<PageResult<String>, ApiError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let _ = self.started.send(call);
        if call == 1 {
            self.release.notified().await;
        }
        Ok(PageResult {
            data: vec![format!("call-{call}")],
            page: PageInfo { total_pages: 1, total_elements: 1, size: 10 },
        })
    }
}

// =============================================================================
// search
// =============================================================================

#[tokio::test]
async fn search_fetches_first_page() {
    let fetcher = StubFetcher::new(23);
    let controller: PagedListController<String> = PagedListController::new(fetcher.clone());

    let outcome = controller.search().await.unwrap();

    assert_eq!(outcome, FetchOutcome::Applied);
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.rows.len(), 10);
    assert_eq!(snapshot.rows[0], "row-1");
    assert_eq!(snapshot.info.total_pages, 3);
    assert_eq!(snapshot.info.total_elements, 23);
}

#[tokio::test]
async fn search_restarts_at_first_page() {
    let fetcher = StubFetcher::new(23);
    let controller: PagedListController<String> = PagedListController::new(fetcher.clone());
    controller.search().await.unwrap();
    controller.change_page(2).await.unwrap();

    controller.set_filter("title", "engineer");
    controller.search().await.unwrap();

    let query = fetcher.last_query();
    assert_eq!(query.page, 0);
    assert_eq!(query.filters.get("title").map(String::as_str), Some("engineer"));
}

#[tokio::test]
async fn set_filter_alone_does_not_fetch() {
    let fetcher = StubFetcher::new(23);
    let controller: PagedListController<String> = PagedListController::new(fetcher.clone());

    controller.set_filter("title", "engineer");
    controller.set_filters(BTreeMap::from([("status".to_owned(), "OPEN".to_owned())]));

    assert_eq!(fetcher.call_count(), 0);
}

#[tokio::test]
async fn empty_filter_value_removes_the_field() {
    let fetcher = StubFetcher::new(23);
    let controller: PagedListController<String> = PagedListController::new(fetcher.clone());
    controller.set_filter("title", "engineer");

    controller.set_filter("title", "");

    assert!(controller.query().filters.is_empty());
}

// =============================================================================
// change_page
// =============================================================================

#[tokio::test]
async fn change_page_clamps_past_the_end() {
    let fetcher = StubFetcher::new(23);
    let controller: PagedListController<String> = PagedListController::new(fetcher.clone());
    controller.search().await.unwrap();

    controller.change_page(99).await.unwrap();

    assert_eq!(fetcher.last_query().page, 2);
    assert_eq!(controller.snapshot().rows, vec!["row-21", "row-22", "row-23"]);
}

#[tokio::test]
async fn change_page_defaults_to_zero_before_any_fetch() {
    let fetcher = StubFetcher::new(23);
    let controller: PagedListController<String> = PagedListController::new(fetcher.clone());

    controller.change_page(5).await.unwrap();

    assert_eq!(fetcher.last_query().page, 0);
}

// =============================================================================
// change_page_size
// =============================================================================

#[tokio::test]
async fn change_page_size_rejects_unlisted_size_without_fetching() {
    let fetcher = StubFetcher::new(23);
    let controller: PagedListController<String> = PagedListController::new(fetcher.clone());

    let err = controller.change_page_size(7).await.unwrap_err();

    assert!(matches!(err, ListError::InvalidPageSize(7)));
    assert_eq!(fetcher.call_count(), 0);
}

#[tokio::test]
async fn change_page_size_restarts_at_first_page() {
    let fetcher = StubFetcher::new(23);
    let controller: PagedListController<String> = PagedListController::new(fetcher.clone());
    controller.search().await.unwrap();
    controller.change_page(2).await.unwrap();

    controller.change_page_size(20).await.unwrap();

    let query = fetcher.last_query();
    assert_eq!(query.page, 0);
    assert_eq!(query.size, 20);
    assert_eq!(controller.snapshot().rows.len(), 20);
}

// =============================================================================
// reset / refresh
// =============================================================================

#[tokio::test]
async fn reset_clears_filters_and_fetches() {
    let fetcher = StubFetcher::new(23);
    let controller: PagedListController<String> = PagedListController::new(fetcher.clone());
    controller.set_filter("title", "engineer");
    controller.search().await.unwrap();

    controller.reset().await.unwrap();

    let query = fetcher.last_query();
    assert!(query.filters.is_empty());
    assert_eq!(query.page, 0);
}

#[tokio::test]
async fn reset_on_fresh_controller_still_fetches() {
    let fetcher = StubFetcher::new(23);
    let controller: PagedListController<String> = PagedListController::new(fetcher.clone());

    let outcome = controller.reset().await.unwrap();

    assert_eq!(outcome, FetchOutcome::Applied);
    assert_eq!(fetcher.call_count(), 1);
}

#[tokio::test]
async fn refresh_preserves_page_and_filters() {
    let fetcher = StubFetcher::new(23);
    let controller: PagedListController<String> = PagedListController::new(fetcher.clone());
    controller.set_filter("status", "OPEN");
    controller.search().await.unwrap();
    controller.change_page(1).await.unwrap();

    controller.refresh().await.unwrap();

    let query = fetcher.last_query();
    assert_eq!(query.page, 1);
    assert_eq!(query.filters.get("status").map(String::as_str), Some("OPEN"));
}

// =============================================================================
// failure handling
// =============================================================================

#[tokio::test]
async fn failed_fetch_keeps_last_good_page() {
    let fetcher = StubFetcher::new(23);
    let controller: PagedListController<String> = PagedListController::new(fetcher.clone());
    controller.search().await.unwrap();

    fetcher.fail.store(true, Ordering::SeqCst);
    let err = controller.refresh().await.unwrap_err();

    assert!(matches!(err, ListError::Api(ApiError::Network(_))));
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.rows.len(), 10);
    assert_eq!(snapshot.info.total_elements, 23);
}

#[tokio::test]
async fn failed_page_change_keeps_snapshot_on_last_good_page() {
    let fetcher = StubFetcher::new(23);
    let controller: PagedListController<String> = PagedListController::new(fetcher.clone());
    controller.search().await.unwrap();

    fetcher.fail.store(true, Ordering::SeqCst);
    controller.change_page(2).await.unwrap_err();

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.page, 0);
    assert_eq!(snapshot.rows[0], "row-1");
    assert_eq!(snapshot.row_number(0), 1);
    assert_eq!(snapshot.range_label(), "1 - 10 of 23");
    assert_eq!(snapshot.window(), vec![0, 1, 2]);
}

#[tokio::test]
async fn failed_size_change_keeps_snapshot_size() {
    let fetcher = StubFetcher::new(23);
    let controller: PagedListController<String> = PagedListController::new(fetcher.clone());
    controller.search().await.unwrap();

    fetcher.fail.store(true, Ordering::SeqCst);
    controller.change_page_size(50).await.unwrap_err();

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.size, 10);
    assert_eq!(snapshot.rows.len(), 10);
}

#[tokio::test]
async fn fetch_after_failure_recovers() {
    let fetcher = StubFetcher::new(23);
    let controller: PagedListController<String> = PagedListController::new(fetcher.clone());
    fetcher.fail.store(true, Ordering::SeqCst);
    controller.search().await.unwrap_err();

    fetcher.fail.store(false, Ordering::SeqCst);
    let outcome = controller.search().await.unwrap();

    assert_eq!(outcome, FetchOutcome::Applied);
    assert_eq!(controller.snapshot().rows.len(), 10);
}

// =============================================================================
// ordering
// =============================================================================

#[tokio::test]
async fn stale_response_is_discarded() {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let fetcher = Arc::new(GatedFetcher {
        started: tx,
        release: tokio::sync::Notify::new(),
        calls: AtomicU64::new(0),
    });
    let controller: PagedListController<String> = PagedListController::new(fetcher.clone());

    let slow = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.search().await })
    };
    assert_eq!(rx.recv().await, Some(1));

    // Second dispatch while the first is still in flight.
    let outcome = controller.refresh().await.unwrap();
    assert_eq!(rx.recv().await, Some(2));
    assert_eq!(outcome, FetchOutcome::Applied);
    assert_eq!(controller.snapshot().rows, vec!["call-2".to_owned()]);

    fetcher.release.notify_one();
    let stale = slow.await.unwrap().unwrap();
    assert_eq!(stale, FetchOutcome::Superseded);
    assert_eq!(controller.snapshot().rows, vec!["call-2".to_owned()]);
}

// =============================================================================
// snapshot helpers
// =============================================================================

#[tokio::test]
async fn snapshot_exposes_window_and_labels() {
    let fetcher = StubFetcher::new(23);
    let controller: PagedListController<String> = PagedListController::new(fetcher.clone());
    controller.search().await.unwrap();
    controller.change_page(1).await.unwrap();

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.window(), vec![0, 1, 2]);
    assert_eq!(snapshot.row_number(0), 11);
    assert_eq!(snapshot.range_label(), "11 - 20 of 23");
}

#[tokio::test]
async fn with_query_seeds_size_and_sort() {
    let fetcher = StubFetcher::new(23);
    let query = PageQuery {
        size: 5,
        sort_by: Some("fullName".to_owned()),
        order: Some(SortOrder::Asc),
        ..PageQuery::default()
    };
    let controller: PagedListController<String> =
        PagedListController::with_query(fetcher.clone(), query);

    controller.search().await.unwrap();

    let sent = fetcher.last_query();
    assert_eq!(sent.size, 5);
    assert_eq!(sent.sort_by.as_deref(), Some("fullName"));
    assert_eq!(sent.order, Some(SortOrder::Asc));
}

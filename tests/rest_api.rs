//! End-to-end tests against an in-process mock of the recruitment backend.
//!
//! The mock speaks the real wire contract: bearer-token auth, the
//! `{data, page}` search envelope, and query-parameter status patches.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use hireboard::auth::{AuthGate, Role};
use hireboard::controller::PagedListController;
use hireboard::entities::{Job, JobStatus, OfferStatus};
use hireboard::error::ApiError;
use hireboard::net::ApiClient;
use hireboard::net::auth::{AuthApi, Credentials};
use hireboard::net::jobs::JobsApi;
use hireboard::net::lookups::LookupsApi;
use hireboard::net::offers::OffersApi;
use hireboard::session::{MemoryStorage, SessionStorage, UserInfo};

const TOKEN: &str = "tok-integration";
const PASSWORD: &str = "hunter2";

// =============================================================================
// mock backend
// =============================================================================

fn require_token(headers: &HeaderMap) -> Result<(), StatusCode> {
    let ok = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == format!("Bearer {TOKEN}"));
    if ok { Ok(()) } else { Err(StatusCode::UNAUTHORIZED) }
}

#[derive(Deserialize)]
struct LoginBody {
    email: String,
    password: String,
}

async fn login(Json(body): Json<LoginBody>) -> Result<Json<Value>, StatusCode> {
    if body.password != PASSWORD {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(json!({
        "token": TOKEN,
        "user": {
            "id": Uuid::new_v4(),
            "fullName": "Alice Tran",
            "email": body.email,
            "roles": ["RECRUITER"],
        }
    })))
}

/// 23 jobs titled `Backend Developer 1..=23`, filtered by title substring
/// and sliced by page/size.
async fn search_jobs(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    require_token(&headers)?;
    let page: usize = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(0);
    let size: usize = params.get("size").and_then(|p| p.parse().ok()).unwrap_or(10);
    let title = params.get("title").cloned().unwrap_or_default();

    let matching: Vec<String> = (1..=23)
        .map(|n| format!("Backend Developer {n}"))
        .filter(|t| t.contains(&title))
        .collect();
    let rows: Vec<Value> = matching
        .iter()
        .skip(page * size)
        .take(size)
        .map(|t| json!({"id": Uuid::new_v4(), "title": t, "level": "JUNIOR", "status": "OPEN"}))
        .collect();
    Ok(Json(json!({
        "data": rows,
        "page": {
            "totalPages": matching.len().div_ceil(size),
            "totalElements": matching.len(),
            "size": size,
        }
    })))
}

/// Same dataset as `search_jobs`, restricted by the mandatory `status`
/// parameter. Every mock job is OPEN.
async fn search_jobs_by_status(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    require_token(&headers)?;
    let status = params.get("status").ok_or(StatusCode::BAD_REQUEST)?;
    let size: usize = params.get("size").and_then(|p| p.parse().ok()).unwrap_or(10);

    let matching: Vec<String> = if status == "OPEN" {
        (1..=23).map(|n| format!("Backend Developer {n}")).collect()
    } else {
        Vec::new()
    };
    let rows: Vec<Value> = matching
        .iter()
        .take(size)
        .map(|t| json!({"id": Uuid::new_v4(), "title": t, "level": "JUNIOR", "status": status}))
        .collect();
    Ok(Json(json!({
        "data": rows,
        "page": {
            "totalPages": matching.len().div_ceil(size),
            "totalElements": matching.len(),
            "size": size,
        }
    })))
}

async fn create_job(
    headers: HeaderMap,
    Json(draft): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    require_token(&headers)?;
    let mut job = draft;
    job["id"] = json!(Uuid::new_v4());
    Ok(Json(job))
}

async fn patch_offer_status(
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    require_token(&headers)?;
    let status = params.get("status").ok_or(StatusCode::BAD_REQUEST)?;
    Ok(Json(json!({
        "id": id,
        "candidateId": Uuid::new_v4(),
        "candidateName": "Alice Tran",
        "status": status,
    })))
}

async fn list_departments(headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    require_token(&headers)?;
    Ok(Json(json!([
        {"id": Uuid::new_v4(), "name": "Engineering"},
        {"id": Uuid::new_v4(), "name": "Recruitment"},
    ])))
}

async fn verify_token(Path(token): Path<String>) -> Json<Value> {
    Json(json!(token == "reset-ok"))
}

async fn forgot_password(Json(_body): Json<Value>) -> StatusCode {
    StatusCode::OK
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResetBody {
    token: String,
    new_password: String,
}

async fn change_password(Json(body): Json<ResetBody>) -> Result<StatusCode, (StatusCode, String)> {
    if body.token == "reset-ok" && !body.new_password.is_empty() {
        Ok(StatusCode::OK)
    } else {
        Err((StatusCode::UNPROCESSABLE_ENTITY, "reset token expired".to_owned()))
    }
}

async fn start_backend() -> String {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/verifyToken/{token}", get(verify_token))
        .route("/api/auth/forgotPassword", post(forgot_password))
        .route("/api/auth/changePassword", post(change_password))
        .route("/api/jobs/search", get(search_jobs))
        .route("/api/jobs/status", get(search_jobs_by_status))
        .route("/api/jobs", post(create_job))
        .route("/api/departments", get(list_departments))
        .route("/api/offers/{id}/status", patch(patch_offer_status));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

fn sample_user() -> UserInfo {
    UserInfo {
        id: Uuid::new_v4(),
        full_name: "Alice Tran".to_owned(),
        email: "alice@example.com".to_owned(),
        roles: vec![Role::Recruiter],
    }
}

/// Client whose storage already holds a valid token.
fn authed_client(base: &str) -> Arc<ApiClient> {
    let storage = Arc::new(MemoryStorage::new());
    storage.persist(TOKEN, &sample_user()).unwrap();
    let storage: Arc<dyn SessionStorage> = storage;
    Arc::new(ApiClient::new(base, storage).unwrap())
}

// =============================================================================
// auth flow
// =============================================================================

#[tokio::test]
async fn login_round_trips_through_the_gate() {
    let base = start_backend().await;
    let storage: Arc<dyn SessionStorage> = Arc::new(MemoryStorage::new());
    let api = Arc::new(ApiClient::new(&base, Arc::clone(&storage)).unwrap());
    let auth = AuthApi::new(Arc::clone(&api));

    let err = auth
        .login(&Credentials { email: "alice@example.com".to_owned(), password: "wrong".to_owned() })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));

    let data = auth
        .login(&Credentials {
            email: "alice@example.com".to_owned(),
            password: PASSWORD.to_owned(),
        })
        .await
        .unwrap();

    let gate = AuthGate::new(Arc::clone(&storage));
    gate.initialize();
    gate.login(&data).unwrap();

    assert!(gate.is_authenticated());
    assert!(gate.has_access(&Role::STAFF));
    assert!(!gate.has_access(&[Role::Admin]));

    // The persisted token now flows into authorized requests.
    let jobs = JobsApi::new(api);
    let result = jobs.search(&hireboard::page::PageQuery::default()).await.unwrap();
    assert_eq!(result.page.total_elements, 23);
}

#[tokio::test]
async fn requests_without_a_session_are_unauthorized() {
    let base = start_backend().await;
    let storage: Arc<dyn SessionStorage> = Arc::new(MemoryStorage::new());
    let api = Arc::new(ApiClient::new(&base, storage).unwrap());
    let jobs = JobsApi::new(api);

    let err = jobs.search(&hireboard::page::PageQuery::default()).await.unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized));
    assert!(err.is_session_expired());
}

#[tokio::test]
async fn password_flows_round_trip() {
    let base = start_backend().await;
    let storage: Arc<dyn SessionStorage> = Arc::new(MemoryStorage::new());
    let api = Arc::new(ApiClient::new(&base, storage).unwrap());
    let auth = AuthApi::new(api);

    // Anonymous flows, no session in storage.
    assert!(auth.verify_token("reset-ok").await.unwrap());
    assert!(!auth.verify_token("reset-stale").await.unwrap());

    auth.forgot_password("alice@example.com").await.unwrap();

    auth.reset_password("reset-ok", "new-password").await.unwrap();
    let err = auth.reset_password("reset-stale", "new-password").await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected(_)));
}

// =============================================================================
// lookups
// =============================================================================

#[tokio::test]
async fn lookups_decode_id_name_pairs() {
    let base = start_backend().await;
    let api = authed_client(&base);
    let lookups = LookupsApi::new(api);

    let departments = lookups.departments().await.unwrap();

    assert_eq!(departments.len(), 2);
    assert_eq!(departments[0].name, "Engineering");
    assert_eq!(departments[1].name, "Recruitment");
}

// =============================================================================
// paged lists
// =============================================================================

#[tokio::test]
async fn controller_drives_search_pagination_and_filters() {
    let base = start_backend().await;
    let api = authed_client(&base);
    let controller: PagedListController<Job> =
        PagedListController::new(Arc::new(JobsApi::new(api)));

    controller.search().await.unwrap();
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.rows.len(), 10);
    assert_eq!(snapshot.info.total_pages, 3);
    assert_eq!(snapshot.range_label(), "1 - 10 of 23");

    // Out-of-range request lands on the last page.
    controller.change_page(99).await.unwrap();
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.page, 2);
    assert_eq!(snapshot.rows.len(), 3);
    assert_eq!(snapshot.range_label(), "21 - 23 of 23");

    // A filtered search restarts at the first page.
    controller.set_filter("title", "Developer 2");
    controller.search().await.unwrap();
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.page, 0);
    assert_eq!(snapshot.info.total_elements, 5);
    assert!(snapshot.rows.iter().all(|job| job.title.contains("Developer 2")));
}

#[tokio::test]
async fn search_by_status_restricts_to_one_status() {
    let base = start_backend().await;
    let api = authed_client(&base);
    let jobs = JobsApi::new(api);
    let query = hireboard::page::PageQuery::default();

    let open = jobs.search_by_status(JobStatus::Open, &query).await.unwrap();
    assert_eq!(open.page.total_elements, 23);
    assert!(open.data.iter().all(|job| job.status == JobStatus::Open));

    let closed = jobs.search_by_status(JobStatus::Closed, &query).await.unwrap();
    assert!(closed.data.is_empty());
    assert_eq!(closed.page.total_elements, 0);
}

#[tokio::test]
async fn create_echoes_the_draft_with_an_assigned_id() {
    let base = start_backend().await;
    let api = authed_client(&base);
    let jobs = JobsApi::new(api);

    let draft = hireboard::entities::JobDraft {
        title: "Platform Engineer".to_owned(),
        skills: vec!["Rust".to_owned()],
        start_date: None,
        end_date: None,
        level: hireboard::entities::JobLevel::Senior,
        status: hireboard::entities::JobStatus::Draft,
        working_address: None,
        description: None,
        benefits: Vec::new(),
    };
    let created = jobs.create(&draft).await.unwrap();

    assert_eq!(created.title, "Platform Engineer");
    assert_eq!(created.level, hireboard::entities::JobLevel::Senior);
}

// =============================================================================
// status transitions
// =============================================================================

#[tokio::test]
async fn offer_status_patch_travels_as_a_query_param() {
    let base = start_backend().await;
    let api = authed_client(&base);
    let offers = OffersApi::new(api);
    let id = Uuid::new_v4();

    let updated = offers.update_status(id, OfferStatus::Approved).await.unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(updated.status, OfferStatus::Approved);

    let cancelled = offers.update_status(id, OfferStatus::Cancelled).await.unwrap();
    assert_eq!(cancelled.status, OfferStatus::Cancelled);
}

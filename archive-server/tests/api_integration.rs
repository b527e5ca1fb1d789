//! Integration tests for the archive API endpoints.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

use archive_server::config::{ArchiveConfig, Config, ServerConfig};
use archive_server::{create_router, AppState};
use shared::store::{ListPage, ObjectStore, StorageConfig};
use shared::ListingError;

const REFERER: &str = "https://archive.test";

/// Store double that counts listing calls and answers from a fixed closure.
struct FakeStore {
    respond: Box<dyn Fn(&str) -> Result<ListPage, ListingError> + Send + Sync>,
    calls: AtomicUsize,
}

impl FakeStore {
    fn new(
        respond: impl Fn(&str) -> Result<ListPage, ListingError> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            respond: Box::new(respond),
            calls: AtomicUsize::new(0),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ObjectStore for FakeStore {
    async fn list_page(
        &self,
        prefix: &str,
        _delimiter: Option<String>,
        _max_keys: usize,
    ) -> Result<ListPage, ListingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.respond)(prefix)
    }
}

fn test_state(store: Arc<FakeStore>) -> Arc<AppState> {
    Arc::new(AppState {
        config: Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            storage: StorageConfig {
                endpoint: "https://s3.test".to_string(),
                region: "test".to_string(),
                bucket: "archive".to_string(),
                access_key: "test-access-key".to_string(),
                secret_key: "test-secret-key".to_string(),
            },
            archive: ArchiveConfig {
                root_prefix: "archive/".to_string(),
                public_base_url: "https://archive.test".to_string(),
                allowed_referer: REFERER.to_string(),
            },
        },
        store,
    })
}

async fn get(state: Arc<AppState>, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header(header::REFERER, REFERER)
        .body(Body::empty())
        .unwrap();
    create_router(state).oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn folder_page(prefixes: &[&str]) -> ListPage {
    ListPage {
        common_prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
        keys: vec![],
    }
}

#[tokio::test]
async fn test_years_lists_root_folders() {
    let store = FakeStore::new(|prefix| {
        assert_eq!(prefix, "archive/");
        Ok(folder_page(&["archive/2022/", "archive/2023/"]))
    });

    let response = get(test_state(store.clone()), "/api/years").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!(["2022", "2023"]));
    assert_eq!(store.call_count(), 1);
}

#[tokio::test]
async fn test_issues_lists_year_folders() {
    let store = FakeStore::new(|prefix| {
        assert_eq!(prefix, "archive/2023/");
        Ok(folder_page(&["archive/2023/01/", "archive/2023/02/"]))
    });

    let response = get(test_state(store), "/api/issues?year=2023").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!(["01", "02"]));
}

#[tokio::test]
async fn test_issues_missing_year_is_400_without_remote_call() {
    let store = FakeStore::new(|_| Ok(ListPage::default()));

    let response = get(test_state(store.clone()), "/api/issues").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("year"));
    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn test_pages_returns_sorted_urls() {
    let store = FakeStore::new(|prefix| {
        assert_eq!(prefix, "archive/2023/01/");
        Ok(ListPage {
            common_prefixes: vec![],
            keys: vec![
                "archive/2023/01/3.jpg".to_string(),
                "archive/2023/01/1.jpg".to_string(),
                "archive/2023/01/2.jpg".to_string(),
            ],
        })
    });

    let response = get(test_state(store), "/api/pages?year=2023&issue=01").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!([
            "https://archive.test/2023/01/1.jpg",
            "https://archive.test/2023/01/2.jpg",
            "https://archive.test/2023/01/3.jpg",
        ])
    );
}

#[tokio::test]
async fn test_pages_missing_parameter_is_400_without_remote_call() {
    let store = FakeStore::new(|_| Ok(ListPage::default()));
    let state = test_state(store.clone());

    let response = get(state.clone(), "/api/pages?year=2023").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response)
        .await["error"]
        .as_str()
        .unwrap()
        .contains("issue"));

    let response = get(state, "/api/pages?issue=01").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn test_provider_status_error_is_500_with_message() {
    let store = FakeStore::new(|_| Err(ListingError::Status(502)));

    let response = get(test_state(store), "/api/years").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("502"));
}

#[tokio::test]
async fn test_provider_failure_message_passes_through() {
    let store = FakeStore::new(|_| Err(ListingError::Provider("connection reset".to_string())));

    let response = get(test_state(store), "/api/pages?year=2023&issue=01").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("connection reset"));
}

#[tokio::test]
async fn test_referer_gate_rejects_missing_and_foreign_referers() {
    let store = FakeStore::new(|_| Ok(ListPage::default()));
    let state = test_state(store.clone());

    let request = Request::builder()
        .uri("/api/years")
        .body(Body::empty())
        .unwrap();
    let response = create_router(state.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let request = Request::builder()
        .uri("/api/years")
        .header(header::REFERER, "https://scraper.example.com")
        .body(Body::empty())
        .unwrap();
    let response = create_router(state).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // gated before any remote call
    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn test_health_is_not_gated() {
    let store = FakeStore::new(|_| Ok(ListPage::default()));

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = create_router(test_state(store))
        .oneshot(request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cors_headers_present() {
    let store = FakeStore::new(|_| Ok(folder_page(&["archive/2023/"])));

    let request = Request::builder()
        .uri("/api/years")
        .header(header::REFERER, REFERER)
        .header(header::ORIGIN, "https://somewhere.example.com")
        .body(Body::empty())
        .unwrap();
    let response = create_router(test_state(store))
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn test_repeated_requests_are_idempotent() {
    let store = FakeStore::new(|_| Ok(folder_page(&["archive/2022/", "archive/2023/"])));
    let state = test_state(store.clone());

    let first = body_json(get(state.clone(), "/api/years").await).await;
    let second = body_json(get(state, "/api/years").await).await;

    assert_eq!(first, second);
    assert_eq!(store.call_count(), 2);
}

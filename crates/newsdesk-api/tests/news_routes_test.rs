//! Integration tests for the read path.
//!
//! Drives the real router through `tower::ServiceExt::oneshot` with the
//! in-memory store standing in for MongoDB.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use newsdesk_api::{create_router, AppState, Config};
use newsdesk_core::storage::memory::InMemoryStore;
use newsdesk_core::{ArticleFilter, NewsArticle, NewsStore, Page, Result, StoreError};
use tower::ServiceExt;

const TEST_KEY: &str = "test-secret";

fn test_app(store: Arc<InMemoryStore>) -> Router {
    let config = Config { api_key: TEST_KEY.into(), ..Config::default() };
    let state = AppState::new(store as Arc<dyn NewsStore>, &config);
    create_router(state)
}

/// Store double whose every operation fails, standing in for an
/// unreachable or timed-out database.
struct FailingStore(StoreError);

impl FailingStore {
    fn unreachable() -> Arc<Self> {
        Arc::new(Self(StoreError::Database("connection refused".into())))
    }

    fn clone_error(&self) -> StoreError {
        match &self.0 {
            StoreError::Database(msg) => StoreError::Database(msg.clone()),
            StoreError::Timeout(secs) => StoreError::Timeout(*secs),
            StoreError::InvalidDocument(msg) => StoreError::InvalidDocument(msg.clone()),
        }
    }
}

#[async_trait::async_trait]
impl NewsStore for FailingStore {
    async fn find(&self, _filter: &ArticleFilter, _page: Page) -> Result<Vec<NewsArticle>> {
        Err(self.clone_error())
    }

    async fn insert(&self, _article: NewsArticle) -> Result<NewsArticle> {
        Err(self.clone_error())
    }

    async fn ping(&self) -> Result<()> {
        Err(self.clone_error())
    }
}

fn failing_app(store: Arc<FailingStore>) -> Router {
    let config = Config { api_key: TEST_KEY.into(), ..Config::default() };
    let state = AppState::new(store as Arc<dyn NewsStore>, &config);
    create_router(state)
}

fn article(date: &str, category: &str, title: &str) -> NewsArticle {
    NewsArticle {
        id: None,
        title: Some(title.into()),
        summary: None,
        image_url: None,
        date: Some(date.into()),
        source_url: None,
        category: Some(category.into()),
    }
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).expect("request build");
    let response = app.oneshot(request).await.expect("request execution");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let json = serde_json::from_slice(&body).expect("json body");
    (status, json)
}

fn titles(body: &serde_json::Value) -> Vec<String> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|a| a["title"].as_str().expect("title").to_string())
        .collect()
}

#[tokio::test]
async fn empty_collection_lists_as_empty_array() {
    let store = Arc::new(InMemoryStore::new());
    let (status, body) = get_json(test_app(store), "/news").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn results_are_sorted_by_date_descending() {
    let store = Arc::new(InMemoryStore::new());
    store.insert(article("2024-01-01", "Tech", "oldest")).await.expect("insert");
    store.insert(article("2024-03-01", "Tech", "newest")).await.expect("insert");
    store.insert(article("2024-02-01", "Tech", "middle")).await.expect("insert");

    let (status, body) = get_json(test_app(store), "/news").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), ["newest", "middle", "oldest"]);

    let dates: Vec<&str> =
        body.as_array().unwrap().iter().map(|a| a["date"].as_str().unwrap()).collect();
    for pair in dates.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[tokio::test]
async fn date_filter_matches_the_exact_string() {
    let store = Arc::new(InMemoryStore::new());
    store.insert(article("2024-01-01", "Tech", "wanted")).await.expect("insert");
    store.insert(article("2024-01-02", "Tech", "other")).await.expect("insert");

    let app = test_app(store.clone());
    let (status, body) = get_json(app, "/news?date=2024-01-01").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), ["wanted"]);

    // Omitting the date returns records across all dates.
    let (_, body) = get_json(test_app(store), "/news").await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn category_all_is_equivalent_to_omitting_the_filter() {
    let store = Arc::new(InMemoryStore::new());
    store.insert(article("2024-01-01", "Tech", "a")).await.expect("insert");
    store.insert(article("2024-01-01", "Sports", "b")).await.expect("insert");
    store.insert(article("2024-01-02", "All news", "c")).await.expect("insert");

    let (_, with_all) = get_json(test_app(store.clone()), "/news?category=All").await;
    let (_, without) = get_json(test_app(store.clone()), "/news").await;
    assert_eq!(with_all, without);

    // A literal category still filters.
    let (_, tech_only) = get_json(test_app(store), "/news?category=Tech").await;
    assert_eq!(titles(&tech_only), ["a"]);
}

#[tokio::test]
async fn second_page_returns_records_six_through_ten() {
    // 12 same-date Tech records seeded in a fixed order; insertion order is
    // the tiebreak oracle.
    let store = Arc::new(InMemoryStore::new());
    for i in 0..12 {
        store
            .insert(article("2024-01-01", "Tech", &format!("tech-{i:02}")))
            .await
            .expect("insert");
    }

    let (status, body) =
        get_json(test_app(store), "/news?category=Tech&page=2&pageSize=5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), ["tech-05", "tech-06", "tech-07", "tech-08", "tech-09"]);
}

#[tokio::test]
async fn consecutive_pages_partition_the_result_set() {
    let store = Arc::new(InMemoryStore::new());
    for i in 0..11 {
        store
            .insert(article(&format!("2024-01-{:02}", i + 1), "Tech", &format!("t{i:02}")))
            .await
            .expect("insert");
    }

    let (_, full) = get_json(test_app(store.clone()), "/news?pageSize=100").await;

    let mut stitched = Vec::new();
    for page in 1..=4 {
        let (status, body) =
            get_json(test_app(store.clone()), &format!("/news?page={page}&pageSize=4")).await;
        assert_eq!(status, StatusCode::OK);
        let batch = body.as_array().unwrap().clone();
        assert!(batch.len() <= 4);
        stitched.extend(batch);
    }

    assert_eq!(serde_json::Value::Array(stitched), full);
}

#[tokio::test]
async fn page_defaults_cap_the_window_at_ten() {
    let store = Arc::new(InMemoryStore::new());
    for i in 0..15 {
        store
            .insert(article("2024-01-01", "Tech", &format!("t{i:02}")))
            .await
            .expect("insert");
    }

    let (_, body) = get_json(test_app(store), "/news").await;
    assert_eq!(body.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn non_numeric_page_is_rejected_with_400() {
    let store = Arc::new(InMemoryStore::new());
    let (status, body) = get_json(test_app(store), "/news?page=abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().expect("error message").contains("page"));
}

#[tokio::test]
async fn negative_page_size_is_rejected_with_400() {
    let store = Arc::new(InMemoryStore::new());
    let (status, body) = get_json(test_app(store), "/news?pageSize=-1").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn unrecognized_query_parameters_are_ignored() {
    let store = Arc::new(InMemoryStore::new());
    store.insert(article("2024-01-01", "Tech", "a")).await.expect("insert");

    let (status, body) = get_json(test_app(store), "/news?utm_source=feed").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), ["a"]);
}

#[tokio::test]
async fn store_failure_surfaces_as_500_with_error_body() {
    let (status, body) = get_json(failing_app(FailingStore::unreachable()), "/news").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "error": "database error: connection refused" }));
}

#[tokio::test]
async fn store_timeout_surfaces_as_500_with_error_body() {
    let store = Arc::new(FailingStore(StoreError::Timeout(10)));
    let (status, body) = get_json(failing_app(store), "/news").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        serde_json::json!({ "error": "store operation timed out after 10s" })
    );
}

#[tokio::test]
async fn health_reports_store_down_when_the_ping_fails() {
    let (status, body) = get_json(failing_app(FailingStore::unreachable()), "/health").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["checks"]["store"]["status"], "down");
}

#[tokio::test]
async fn health_reports_store_up() {
    let store = Arc::new(InMemoryStore::new());
    let (status, body) = get_json(test_app(store), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["store"]["status"], "up");
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let store = Arc::new(InMemoryStore::new());
    let request = Request::builder().uri("/news").body(Body::empty()).expect("request build");
    let response = test_app(store).oneshot(request).await.expect("request execution");

    assert!(response.headers().contains_key("X-Request-Id"));
}

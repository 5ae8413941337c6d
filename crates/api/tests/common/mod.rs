#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use folio_api::config::{LogFormat, ServerConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_db::{
    DeleteResult, Document, DocumentStore, FindOptions, InsertOneResult, MemoryStore,
    SharedStore, StoreError, StoredDocument, UpdateResult,
};

/// Build a test `ServerConfig` with permissive CORS and a 30-second timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        api_title: "Portfolio API".to_string(),
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router (same middleware as production) over
/// the given store.
pub fn build_test_app(store: SharedStore) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A fresh app over an empty in-memory store. The store handle is returned
/// so tests can inspect what was persisted.
pub fn memory_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let shared: SharedStore = store.clone();
    (build_test_app(shared), store)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::POST, uri, body).await
}

pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PUT, uri, body).await
}

async fn json_request(
    app: &Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn contact_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "subject": "Project inquiry",
        "message": "I would like to talk about a project."
    })
}

pub fn project_body(title: &str, category: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": "A personal site",
        "technologies": ["React", "FastAPI"],
        "category": category,
        "featured": true
    })
}

// ---------------------------------------------------------------------------
// A store whose every operation fails
// ---------------------------------------------------------------------------

pub struct FailingStore;

fn offline() -> StoreError {
    StoreError::Malformed("store offline".to_string())
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn insert_one(
        &self,
        _collection: &str,
        _id: Uuid,
        _body: Document,
    ) -> Result<InsertOneResult, StoreError> {
        Err(offline())
    }

    async fn find_one(
        &self,
        _collection: &str,
        _id: Uuid,
    ) -> Result<Option<StoredDocument>, StoreError> {
        Err(offline())
    }

    async fn find_many(
        &self,
        _collection: &str,
        _options: &FindOptions,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        Err(offline())
    }

    async fn update_one(
        &self,
        _collection: &str,
        _id: Uuid,
        _set: Document,
    ) -> Result<UpdateResult, StoreError> {
        Err(offline())
    }

    async fn delete_one(&self, _collection: &str, _id: Uuid) -> Result<DeleteResult, StoreError> {
        Err(offline())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(offline())
    }

    async fn close(&self) {}
}

pub fn failing_app() -> Router {
    build_test_app(Arc::new(FailingStore))
}

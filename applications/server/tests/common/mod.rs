/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use roster_core::UserStore;
use roster_server::{api, AppState};

/// Build a test router over the sample fixture store, returning the router
/// plus the seeded record ids in insertion order (two active, one inactive).
pub fn seeded_app() -> (Router, Vec<String>) {
    let store = UserStore::with_sample_users();
    let ids = store.records().iter().map(|u| u.id.to_string()).collect();
    (api::router(AppState::new(store)), ids)
}

/// Build a test router over an empty store.
pub fn empty_app() -> Router {
    api::router(AppState::new(UserStore::new()))
}

/// Build a JSON request
pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a bodyless request
pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Collect a response body as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

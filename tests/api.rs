//! Router-level tests for paths that must resolve before any store access.
//!
//! The pool is lazily constructed and never dialed; a request that reached
//! the database would fail with a connection error (500), so the asserted
//! statuses and messages prove validation short-circuits ahead of the store.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use newsroom::{api_routes, common_routes, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost/newsroom_test")
        .expect("lazy pool");
    let state = AppState { pool };
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", api_routes(state))
}

async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json_body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let response = test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, parsed)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Method::GET, uri, None).await
}

#[tokio::test]
async fn health_responds_ok() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn version_names_the_service() {
    let (status, body) = get("/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "newsroom");
}

#[tokio::test]
async fn unmatched_api_paths_are_bad_requests() {
    for uri in ["/api/2000", "/api/invalid"] {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["msg"], "cannot find id - bad request");
    }
}

#[tokio::test]
async fn listing_rejects_more_than_three_query_keys() {
    let (status, body) =
        get("/api/articles?sort_by=author&order=DESC&thing=ASC&topic=user").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Too many query keys");
}

#[tokio::test]
async fn listing_rejects_unknown_query_keys() {
    let (status, body) = get("/api/articles?sort_by=author&INVALID=DESC&topic=user").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Attempt to query on Invalid key");
}

#[tokio::test]
async fn listing_rejects_unknown_sort_columns() {
    let (status, body) = get("/api/articles?sort_by=INVALID&order=DESC&topic=user").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Invalid sort query");
}

#[tokio::test]
async fn listing_rejects_unknown_order_directions() {
    let (status, body) = get("/api/articles?sort_by=author&order=INVALID&topic=user").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Invalid order query");
}

#[tokio::test]
async fn article_fetch_rejects_non_numeric_ids() {
    let (status, body) = get("/api/articles/invalidid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "invalid id");
}

#[tokio::test]
async fn comment_listing_rejects_non_numeric_ids() {
    let (status, body) = get("/api/articles/invalidid/comments").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "invalid id");
}

#[tokio::test]
async fn vote_patch_rejects_non_numeric_ids() {
    let (status, body) = send(
        Method::PATCH,
        "/api/articles/invalidid",
        Some(json!({ "inc_votes": -1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "invalid id");
}

#[tokio::test]
async fn vote_patch_rejects_non_integer_votes() {
    let (status, body) = send(
        Method::PATCH,
        "/api/articles/1",
        Some(json!({ "inc_votes": "invaliddata" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "invalid id");
}

#[tokio::test]
async fn comment_post_rejects_non_numeric_ids() {
    let (status, body) = send(
        Method::POST,
        "/api/articles/invalidid/comments",
        Some(json!({ "username": "rogersop", "body": "na" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "invalid id");
}

#[tokio::test]
async fn comment_post_rejects_bodies_missing_fields() {
    let (status, body) = send(
        Method::POST,
        "/api/articles/1/comments",
        Some(json!({ "body": "na" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "bad request");
}

#[tokio::test]
async fn comment_delete_rejects_non_numeric_ids() {
    let (status, body) = send(Method::DELETE, "/api/comments/not-an-id", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "invalid id");
}

//! End-to-end tests for the kogut CRUD endpoints, run against the
//! in-memory store.

use axum::body::Body;
use axum::http::Request;
use kurnik_api::{create_router, AppState};
use kurnik_storage::MemoryStore;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_app() -> axum::Router {
    create_router(AppState::new(Arc::new(MemoryStore::new())))
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn post_kogut(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/koguts")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_create_kogut() {
    let app = create_test_app();

    let response = app
        .oneshot(post_kogut(
            json!({"name": "Henrietta", "age": 5, "sex": true}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let kogut = json_body(response).await;
    assert_eq!(
        kogut,
        json!({"id": 1, "name": "Henrietta", "age": 5, "sex": true})
    );
}

#[tokio::test]
async fn test_create_without_age_leaves_age_absent() {
    let app = create_test_app();

    let response = app
        .oneshot(post_kogut(json!({"name": "NoAge", "sex": false})))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let kogut = json_body(response).await;
    assert_eq!(kogut.get("age"), None);
    assert_eq!(kogut["name"], "NoAge");
}

#[tokio::test]
async fn test_create_with_age_zero_keeps_the_zero() {
    let app = create_test_app();

    let response = app
        .oneshot(post_kogut(json!({"name": "Chick", "age": 0, "sex": false})))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let kogut = json_body(response).await;
    assert_eq!(kogut["age"], 0);
}

#[tokio::test]
async fn test_create_with_empty_name_is_rejected() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(post_kogut(json!({"name": "", "age": 5, "sex": true})))
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    // No mutation happened.
    let response = app.oneshot(get("/koguts")).await.unwrap();
    assert_eq!(json_body(response).await, json!([]));
}

#[tokio::test]
async fn test_create_with_malformed_body_is_rejected() {
    let app = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/koguts")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_create_then_get_round_trips() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(post_kogut(json!({"name": "Koko", "age": 2, "sex": false})))
        .await
        .unwrap();
    let created = json_body(response).await;

    let response = app
        .oneshot(get(&format!("/koguts/{}", created["id"])))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(json_body(response).await, created);
}

#[tokio::test]
async fn test_get_all_on_empty_store_is_empty_array() {
    let app = create_test_app();

    let response = app.oneshot(get("/koguts")).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(json_body(response).await, json!([]));
}

#[tokio::test]
async fn test_get_all_is_ordered_by_id() {
    let app = create_test_app();

    for name in ["Kogut1", "Kogut2", "Kogut3"] {
        let response = app
            .clone()
            .oneshot(post_kogut(json!({"name": name, "sex": true})))
            .await
            .unwrap();
        assert_eq!(response.status(), 201);
    }

    let response = app.oneshot(get("/koguts")).await.unwrap();
    let all = json_body(response).await;

    let ids: Vec<_> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|k| k["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_get_with_non_numeric_id_is_rejected() {
    let app = create_test_app();

    let response = app.oneshot(get("/koguts/abc")).await.unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_get_missing_id_is_404() {
    let app = create_test_app();

    let response = app.oneshot(get("/koguts/999")).await.unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_update_replaces_all_mutable_fields() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(post_kogut(json!({"name": "Old", "age": 1, "sex": false})))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let request = Request::builder()
        .method("PUT")
        .uri("/koguts/1")
        .header("content-type", "application/json")
        .body(Body::from(json!({"name": "New", "sex": true}).to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), 200);

    let updated = json_body(response).await;
    assert_eq!(updated, json!({"id": 1, "name": "New", "sex": true}));

    // The replacement is visible on a subsequent read.
    let response = app.oneshot(get("/koguts/1")).await.unwrap();
    assert_eq!(json_body(response).await, updated);
}

#[tokio::test]
async fn test_update_missing_id_is_404() {
    let app = create_test_app();

    let request = Request::builder()
        .method("PUT")
        .uri("/koguts/999")
        .header("content-type", "application/json")
        .body(Body::from(json!({"name": "X", "sex": true}).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_update_with_empty_name_is_rejected() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(post_kogut(json!({"name": "Keep", "sex": true})))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let request = Request::builder()
        .method("PUT")
        .uri("/koguts/1")
        .header("content-type", "application/json")
        .body(Body::from(json!({"name": "", "sex": true}).to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), 400);

    // The record is untouched.
    let response = app.oneshot(get("/koguts/1")).await.unwrap();
    assert_eq!(json_body(response).await["name"], "Keep");
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(post_kogut(json!({"name": "Doomed", "sex": false})))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let request = Request::builder()
        .method("DELETE")
        .uri("/koguts/1")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), 204);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(body.is_empty());

    let response = app.oneshot(get("/koguts/1")).await.unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_delete_missing_id_is_404() {
    let app = create_test_app();

    let request = Request::builder()
        .method("DELETE")
        .uri("/koguts/7")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), 404);
}

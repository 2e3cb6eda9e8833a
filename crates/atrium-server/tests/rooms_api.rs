//! End-to-end router tests over the in-memory backends.

use std::sync::Arc;
use std::time::Duration;

use atrium_core::config::DEFAULT_REQUEST_BUDGET;
use atrium_core::graph::{ensure_default_graph, EDGE_COLLECTION, USERS_COLLECTION};
use atrium_core::traits::GraphStore;
use atrium_graph_stores::MemoryGraphStore;
use atrium_room_stores::DocumentRoomStore;
use atrium_server::{create_server, AppState};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Router over a memory graph store with one pre-existing user `u1`.
async fn test_app(latency: Option<Duration>) -> (Router, Arc<MemoryGraphStore>) {
    let mut memory = MemoryGraphStore::new();
    if let Some(latency) = latency {
        memory = memory.with_latency(latency);
    }
    let memory = Arc::new(memory);
    memory
        .put_document(USERS_COLLECTION, "u1", json!({"name": "alice"}))
        .await;

    let store: Arc<dyn GraphStore> = memory.clone();
    let graph = ensure_default_graph(store.as_ref(), "atrium-test")
        .await
        .expect("graph setup failed");
    let rooms = Arc::new(DocumentRoomStore::new(store.clone()));
    let state = AppState::new(rooms, store, graph, DEFAULT_REQUEST_BUDGET);

    (create_server(state), memory)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_endpoint_responds() {
    let (app, _) = test_app(None).await;

    let response = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn room_lifecycle_scenario() {
    let (app, _) = test_app(None).await;

    // Create a room
    let response = app
        .clone()
        .oneshot(json_request("POST", "/rooms", json!({"name": "Party"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    let uri = body["uri"].as_str().expect("uri in create response");
    let id = uri.rsplit('/').next().unwrap().to_string();
    assert!(!id.is_empty());

    // Connect the pre-existing user
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/rooms/{id}/connect"),
            json!({"userID": "u1"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["user"], "Users/u1");

    // Read it back
    let response = app
        .clone()
        .oneshot(get_request(&format!("/rooms/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Party");

    // Partial update leaves the member count untouched
    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/rooms/{id}"),
            json!({"name": "After Party"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(get_request(&format!("/rooms/{id}")))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["name"], "After Party");
    assert_eq!(body["members"], 0);

    // Delete, then observe the miss
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/rooms/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(get_request(&format!("/rooms/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // A second delete is a miss too, not success
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/rooms/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn connect_to_a_missing_room_leaves_no_edge() {
    let (app, memory) = test_app(None).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/rooms/nope/connect",
            json!({"userID": "u1"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("room not found"));
    assert_eq!(memory.document_count(EDGE_COLLECTION).await.unwrap(), 0);
}

#[tokio::test]
async fn connect_with_a_missing_user_leaves_no_edge() {
    let (app, memory) = test_app(None).await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/rooms", json!({"name": "Party"})))
        .await
        .unwrap();
    let body = body_json(response).await;
    let id = body["uri"].as_str().unwrap().rsplit('/').next().unwrap().to_string();

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/rooms/{id}/connect"),
            json!({"userID": "ghost"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("user not found"));
    assert_eq!(memory.document_count(EDGE_COLLECTION).await.unwrap(), 0);
}

#[tokio::test]
async fn malformed_payloads_are_bad_requests() {
    let (app, _) = test_app(None).await;

    // Unparseable body
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/rooms")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Well-formed but empty name
    let response = app
        .oneshot(json_request("POST", "/rooms", json!({"name": "  "})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_rooms_and_routes_are_not_found() {
    let (app, _) = test_app(None).await;

    let response = app
        .clone()
        .oneshot(get_request("/rooms/does-not-exist"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get_request("/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(start_paused = true)]
async fn store_latency_beyond_the_budget_surfaces_as_an_error_not_a_hang() {
    // 1200ms of store latency against the 1000ms request budget.
    let (app, _) = test_app(Some(Duration::from_millis(1200))).await;

    let response = app
        .oneshot(json_request("POST", "/rooms", json!({"name": "Party"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("timed out"));
}

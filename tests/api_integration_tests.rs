//! Integration Tests for API Endpoints
//!
//! Tests the full request/response cycle for each endpoint, including the
//! cache behaviour visible over HTTP.

use std::collections::HashSet;

use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    Router,
};
use employee_cache::{api::create_router, seed_employees, AppState, Config};
use serde_json::{json, Value};
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_state() -> AppState {
    AppState::from_config(&Config::default())
}

async fn create_seeded_app() -> Router {
    let state = create_test_state();
    seed_employees(&state.service).await.unwrap();
    create_router(state)
}

async fn body_to_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

fn names(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect()
}

// == List Endpoint Tests ==

#[tokio::test]
async fn test_list_returns_seeded_employees() {
    let app = create_seeded_app().await;

    let response = send(&app, "GET", "/employees", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response).await;
    assert_eq!(
        names(&json),
        vec!["John Doe", "Jane Smith", "Alice Johnson", "Bob Brown"]
    );

    let ids: HashSet<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids.len(), 4);
}

#[tokio::test]
async fn test_list_empty_without_seed() {
    let app = create_router(create_test_state());

    let response = send(&app, "GET", "/employees", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_json(response).await, json!([]));
}

#[tokio::test]
async fn test_list_is_stale_after_create() {
    let app = create_seeded_app().await;

    // Populates the aggregate cache entry
    let before = body_to_json(send(&app, "GET", "/employees", None).await).await;

    let created = send(&app, "POST", "/employees", Some(json!({"name": "Carol White"}))).await;
    assert_eq!(created.status(), StatusCode::CREATED);

    // Current behaviour: the listing is not invalidated, the new employee is absent
    let after = body_to_json(send(&app, "GET", "/employees", None).await).await;
    assert_eq!(after, before);
    assert!(!names(&after).contains(&"Carol White".to_string()));
}

// == Get Endpoint Tests ==

#[tokio::test]
async fn test_get_seeded_employee() {
    let app = create_seeded_app().await;

    let response = send(&app, "GET", "/employees/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response).await;
    assert_eq!(json, json!({"id": 1, "name": "John Doe"}));
}

#[tokio::test]
async fn test_get_not_found_has_empty_body() {
    let app = create_seeded_app().await;

    let response = send(&app, "GET", "/employees/999", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());
}

// == Create Endpoint Tests ==

#[tokio::test]
async fn test_create_then_get() {
    let app = create_router(create_test_state());

    let response = send(&app, "POST", "/employees", Some(json!({"name": "Jane Smith"}))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_to_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Jane Smith");

    let response = send(&app, "GET", &format!("/employees/{}", id), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_json(response).await, created);
}

#[tokio::test]
async fn test_create_accepts_empty_name() {
    let app = create_router(create_test_state());

    let response = send(&app, "POST", "/employees", Some(json!({"id": null, "name": ""}))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_to_json(response).await["name"], "");
}

#[tokio::test]
async fn test_create_after_max_id_is_server_error() {
    let app = create_router(create_test_state());

    let response = send(
        &app,
        "POST",
        "/employees",
        Some(json!({"id": i64::MAX, "name": "Last"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(&app, "POST", "/employees", Some(json!({"name": "Next"}))).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_to_json(response).await["error"],
        "Query failed: id sequence exhausted"
    );
}

// == Update Endpoint Tests ==

#[tokio::test]
async fn test_update_existing_employee() {
    let app = create_seeded_app().await;

    let response = send(&app, "PUT", "/employees/2", Some(json!({"name": "Jane Doe"}))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_json(response).await, json!({"id": 2, "name": "Jane Doe"}));

    let response = send(&app, "GET", "/employees/2", None).await;
    assert_eq!(body_to_json(response).await["name"], "Jane Doe");
}

#[tokio::test]
async fn test_update_ignores_body_id() {
    let app = create_seeded_app().await;

    let response = send(
        &app,
        "PUT",
        "/employees/3",
        Some(json!({"id": 77, "name": "Alice Jones"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_json(response).await, json!({"id": 3, "name": "Alice Jones"}));

    let response = send(&app, "GET", "/employees/77", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_missing_returns_server_error_not_404() {
    let app = create_seeded_app().await;

    let response = send(&app, "PUT", "/employees/999", Some(json!({"name": "Ghost"}))).await;

    // A 404 would be the consistent answer; the update path reports a generic failure
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_to_json(response).await;
    assert_eq!(json["error"], "Employee not found with id 999");
}

// == Delete Endpoint Tests ==

#[tokio::test]
async fn test_delete_evicts_cached_employee() {
    let app = create_seeded_app().await;

    // Seeded ids are cached; make sure it is served first
    assert_eq!(
        send(&app, "GET", "/employees/4", None).await.status(),
        StatusCode::OK
    );

    let response = send(&app, "DELETE", "/employees/4", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());

    let response = send(&app, "GET", "/employees/4", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_is_no_content() {
    let app = create_seeded_app().await;

    let response = send(&app, "DELETE", "/employees/12345", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// == Stats and Health Endpoint Tests ==

#[tokio::test]
async fn test_stats_reflect_cache_usage() {
    let app = create_seeded_app().await;

    send(&app, "GET", "/employees/1", None).await; // hit (warmed by seeding)
    send(&app, "GET", "/employees/500", None).await; // miss
    send(&app, "GET", "/employees", None).await; // miss, then cached
    send(&app, "GET", "/employees", None).await; // hit

    let response = send(&app, "GET", "/stats", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response).await;
    assert_eq!(json["region"], "employees");
    assert_eq!(json["hits"], 2);
    assert_eq!(json["misses"], 2);
    // Four seeded ids plus the listing
    assert_eq!(json["puts"], 5);
    assert_eq!(json["evictions"], 0);
    assert_eq!(json["total_entries"], 5);
    assert!((json["hit_rate"].as_f64().unwrap() - 0.5).abs() < 0.001);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_router(create_test_state());

    let response = send(&app, "GET", "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert!(json["timestamp"].is_string());
}

// == End-to-End Test ==

#[tokio::test]
async fn test_end_to_end_over_tcp() {
    let app = create_seeded_app().await;
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::new();
    let base = format!("http://{}", addr);

    let created: Value = client
        .post(format!("{}/employees", base))
        .json(&json!({"name": "Dana Green"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(id, 5);

    let response = client
        .put(format!("{}/employees/{}", base, id))
        .json(&json!({"name": "Dana Blue"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let fetched: Value = client
        .get(format!("{}/employees/{}", base, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, json!({"id": 5, "name": "Dana Blue"}));

    let response = client
        .delete(format!("{}/employees/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);

    server.abort();
}

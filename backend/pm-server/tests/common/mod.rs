#![allow(dead_code)]

//! Test infrastructure for pm-server API tests

use pm_db::{MemoryStore, SqliteStore};
use pm_server::AppState;
use pm_workspace::Workspace;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// AppState backed by a fresh in-memory store
pub fn create_test_app_state() -> AppState {
    AppState::new(Workspace::new(Arc::new(MemoryStore::new())))
}

/// AppState backed by an in-memory SQLite database with migrations applied
pub async fn create_sqlite_app_state() -> AppState {
    let pool = pm_db::open_in_memory_pool()
        .await
        .expect("Failed to create test database");

    AppState::new(Workspace::new(Arc::new(SqliteStore::new(pool))))
}

/// Send one request through the router and decode the JSON body (Null when empty)
pub async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// POST a project and return its id
pub async fn create_test_project(app: &Router, name: &str) -> String {
    let (status, json) = send(
        app.clone(),
        "POST",
        "/api/projects",
        Some(serde_json::json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    json["project"]["id"].as_str().unwrap().to_string()
}

/// POST a team member and return its id
pub async fn create_test_member(app: &Router, name: &str, capacity: i64) -> String {
    let (status, json) = send(
        app.clone(),
        "POST",
        "/api/team",
        Some(serde_json::json!({ "name": name, "role": "Artist", "capacity": capacity })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    json["member"]["id"].as_str().unwrap().to_string()
}

/// POST a task and return the full response body
pub async fn create_test_task(app: &Router, project_id: &str, name: &str) -> Value {
    let (status, json) = send(
        app.clone(),
        "POST",
        "/api/tasks",
        Some(serde_json::json!({ "projectId": project_id, "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    json
}

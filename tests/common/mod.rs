// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use ramadan_scheduler::config::Config;
use ramadan_scheduler::routes::create_router;
use ramadan_scheduler::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app with fresh in-memory stores.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Config::test_default()));
    (create_router(Arc::clone(&state)), state)
}

/// Send a request without a body.
#[allow(dead_code)]
pub async fn send(app: axum::Router, method: &str, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a request with a JSON body.
#[allow(dead_code)]
pub async fn send_json(
    app: axum::Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Register a user through the API and return their id.
#[allow(dead_code)]
pub async fn create_user(app: &axum::Router, name: &str) -> String {
    let response = send_json(
        app.clone(),
        "POST",
        "/api/users",
        serde_json::json!({
            "name": name,
            "email": format!("{}@example.com", name.to_lowercase()),
            "locationId": "1",
            "preferredLanguage": "en",
            "notificationPreference": "PUSH"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Generate a schedule for a location and return the day ids in order.
#[allow(dead_code)]
pub async fn calculate_schedule(app: &axum::Router, location_id: &str) -> Vec<String> {
    let response = send(
        app.clone(),
        "POST",
        &format!("/api/ramadan/calculate/{}", location_id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|day| day["id"].as_str().unwrap().to_string())
        .collect()
}

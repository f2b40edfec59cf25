//! Shared helpers for the router tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use pizza_orders::api::{self, AppState, ConnectionSettings};
use pizza_orders::PizzaSystem;

/// Router over a fresh in-memory system.
pub fn create_test_app() -> Router {
    create_test_app_with(ConnectionSettings::default())
}

pub fn create_test_app_with(settings: ConnectionSettings) -> Router {
    let system = PizzaSystem::in_memory();
    api::router(AppState::new(&system, settings))
}

/// Sends one request and returns the status with the decoded JSON body.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

/// Adds a pizza through the API and returns its id.
pub async fn add_pizza(app: &Router, body: Value) -> String {
    let (status, json) = post(app, "/api/menu", body).await;
    assert_eq!(status, StatusCode::OK, "unexpected response: {json}");
    json["id"].as_str().expect("id should be a string").to_string()
}

//! Shared helpers for the API integration tests
#![allow(dead_code)]

use api::{AppState, routes::create_router};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use common::database::{DatabaseConfig, init_pool, migrate};
use serde_json::{Value, json};
use tower::ServiceExt;

/// A router backed by a fresh in-memory database
pub async fn test_app() -> Router {
    let pool = init_pool(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to open in-memory database");
    migrate(&pool).await.expect("Failed to create schema");

    create_router(AppState::new(pool))
}

/// Send a request and decode the JSON response body
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

/// Create a category and return its ID
pub async fn create_category(app: &Router, name: &str) -> i64 {
    let (status, body) = post(app, "/api/categories", json!({"name": name})).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["data"]["id"].as_i64().unwrap()
}

/// Create a product in a category and return its ID
pub async fn create_product(app: &Router, name: &str, price: Value, category_id: i64) -> i64 {
    let (status, body) = post(
        app,
        "/api/products",
        json!({"name": name, "price": price, "category_id": category_id}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["data"]["id"].as_i64().unwrap()
}

//! Test helper utilities for arithmetic integration tests

#![allow(dead_code)]

use arithmetic::{AppState, ResultStore, SqliteResultStore, build_router, load_templates};
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, StatusCode, header};
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

/// Router backed by a fresh in-memory database
pub async fn create_test_app() -> (Router, SqlitePool) {
    let pool = shared::db::connect_in_memory().await.unwrap();
    let store = SqliteResultStore::new(pool.clone());
    store.init_schema().await.unwrap();
    (create_app_with_store(Arc::new(store)), pool)
}

/// Router with any store implementation (mocks included)
pub fn create_app_with_store(store: Arc<dyn ResultStore>) -> Router {
    let state = AppState::new(load_templates().unwrap(), store, 20);
    build_router(state)
}

/// Database-backed router whose sessions expire after `idle`
pub async fn create_app_with_idle_sessions(idle: Duration) -> Router {
    let pool = shared::db::connect_in_memory().await.unwrap();
    let store = SqliteResultStore::new(pool);
    store.init_schema().await.unwrap();
    let state = AppState::new(load_templates().unwrap(), Arc::new(store), 20).with_session_idle(idle);
    build_router(state)
}

pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_form(app: &Router, uri: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// `name=value` pair from the first Set-Cookie header
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().to_string())
}

pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub fn assert_redirect(response: &Response<Body>, to: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(response), to);
}

/// Solve the question rendered in `<div class="question" id="question">a + b</div>`
pub fn solve_question(html: &str) -> i64 {
    let start = html.find("id=\"question\">").unwrap() + "id=\"question\">".len();
    let end = start + html[start..].find('<').unwrap();
    let text = html[start..end].trim();

    let parts: Vec<&str> = text.split_whitespace().collect();
    assert_eq!(parts.len(), 3, "unexpected question text {text:?}");
    let left: i64 = parts[0].parse().unwrap();
    let right: i64 = parts[2].parse().unwrap();
    match parts[1] {
        "+" => left + right,
        "*" => left * right,
        other => panic!("unexpected operator {other}"),
    }
}

/// Start a quiz and return the session cookie
pub async fn start_quiz(app: &Router, form: &str) -> String {
    let response = post_form(app, "/quiz", form, None).await;
    assert_redirect(&response, "/quiz/question");
    session_cookie(&response).expect("session cookie")
}

pub async fn health_json(app: &Router) -> serde_json::Value {
    let response = get(app, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    serde_json::from_str(&body_text(response).await).unwrap()
}

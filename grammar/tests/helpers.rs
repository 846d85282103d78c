//! Test helper utilities for grammar integration tests

#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, StatusCode, header};
use grammar::core::{Corpus, MockPosTagger, PosTagger, TaggedToken};
use grammar::{AppState, ScoreStore, SqliteScoreStore, build_router, load_templates};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::ServiceExt;

pub const TEST_CORPUS: &str = "The owl watched the moon. A fox crept past the barn. \
    Rain fell on the quiet village. The miller counted his sacks. \
    Children played beside the pond.";

/// Tags every token `NN`, so every quiz answer is Noun
pub fn noun_tagger() -> MockPosTagger {
    let mut tagger = MockPosTagger::new();
    tagger.expect_tag().returning(|sentence| {
        sentence
            .split_whitespace()
            .map(|w| TaggedToken::new(w.trim_end_matches(['.', ',', '!', '?']), "NN"))
            .collect()
    });
    tagger
}

/// Router backed by a fresh in-memory database and the all-noun tagger
pub async fn create_test_app() -> (Router, SqlitePool) {
    let pool = shared::db::connect_in_memory().await.unwrap();
    let store = SqliteScoreStore::new(pool.clone());
    store.init_schema().await.unwrap();
    let app = create_app_with(Arc::new(store), Arc::new(noun_tagger()));
    (app, pool)
}

pub fn create_app_with(store: Arc<dyn ScoreStore>, tagger: Arc<dyn PosTagger>) -> Router {
    let state = AppState::new(
        load_templates().unwrap(),
        store,
        tagger,
        Corpus::from_text(TEST_CORPUS),
        10,
        Some(1234),
    );
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

/// Open a quiz and return the session cookie with the rendered page
pub async fn open_quiz(app: &Router, name: &str, num_questions: u32) -> (String, String) {
    let uri = format!("/quiz?name={name}&num_questions={num_questions}");
    let response = get(app, &uri, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = session_cookie(&response).expect("session cookie");
    (cookie, body_text(response).await)
}

/// Form body answering every question with `answer`
pub fn answers(count: usize, answer: &str) -> String {
    (0..count)
        .map(|i| format!("pos_{i}={answer}"))
        .collect::<Vec<_>>()
        .join("&")
}

//! Test helper utilities for dashboard integration tests

#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, header};
use dashboard::{AppState, build_router, load_templates};
use tower::ServiceExt;

const BOUNDARY: &str = "dashboard-test-boundary";

pub const SALES_CSV: &str = "month,revenue,region\nJan,10.5,north\nFeb,,south\nMar,12,north\n";

pub fn create_test_app() -> Router {
    create_app_with_limit(dashboard::DEFAULT_MAX_UPLOAD_BYTES)
}

pub fn create_app_with_limit(max_upload_bytes: usize) -> Router {
    build_router(AppState::new(load_templates().unwrap(), max_upload_bytes))
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

/// Multipart body with a single `file` field
pub fn multipart_body(filename: &str, contents: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn upload(
    app: &Router,
    filename: &str,
    contents: &[u8],
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(builder.body(Body::from(multipart_body(filename, contents))).unwrap())
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

/// Upload the sales fixture and return the session cookie
pub async fn upload_sales(app: &Router) -> String {
    let response = upload(app, "sales.csv", SALES_CSV.as_bytes(), None).await;
    session_cookie(&response).expect("session cookie")
}

//! Routing table for the dashboard

pub mod handlers;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use shared::CookieManagerLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.max_upload_bytes;
    Router::new()
        .route("/", get(handlers::home))
        .route(
            "/upload",
            post(handlers::upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/chart", get(handlers::chart))
        .route("/health", get(handlers::health_check))
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! Routing table for the grammar quiz

pub mod handlers;

use axum::Router;
use axum::routing::get;
use shared::CookieManagerLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/start", get(handlers::start_form).post(handlers::start_quiz))
        .route("/quiz", get(handlers::quiz).post(handlers::submit_quiz))
        .route("/recent-scores", get(handlers::recent_scores))
        .route("/export-scores", get(handlers::export_scores))
        .route("/result", get(handlers::result))
        .route("/health", get(handlers::health_check))
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

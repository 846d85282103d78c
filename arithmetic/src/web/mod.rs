//! Routing table for the arithmetic quiz

pub mod handlers;

use axum::Router;
use axum::routing::get;
use shared::CookieManagerLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the Axum router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/quiz", get(handlers::quiz_form).post(handlers::start_quiz))
        .route(
            "/quiz/question",
            get(handlers::question).post(handlers::submit_answer),
        )
        .route("/results/:user_id", get(handlers::results))
        .route("/export/:user_id", get(handlers::export_csv))
        .route("/health", get(handlers::health_check))
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

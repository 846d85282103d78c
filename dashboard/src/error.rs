//! Dashboard error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Unknown chart type: {0}")]
    UnknownChartKind(String),

    #[error("Shared component error: {0}")]
    Shared(#[from] SharedError),
}

impl DashboardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::UnknownColumn(_) | DashboardError::UnknownChartKind(_) => {
                StatusCode::BAD_REQUEST
            }
            DashboardError::Shared(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status.is_server_error() {
            shared::app_error!("Request failed: {}", self);
            "Internal server error".to_string()
        } else {
            shared::app_warn!("Rejected request: {}", self);
            self.to_string()
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;

//! Arithmetic quiz error types

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArithmeticError {
    #[error("User not found: {user_id}")]
    UserNotFound { user_id: i64 },

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Difficulty must be between {min} and {max}, got {value}")]
    DifficultyOutOfRange { value: i64, min: u32, max: u32 },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Shared component error: {0}")]
    Shared(#[from] SharedError),
}

impl ArithmeticError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ArithmeticError::UserNotFound { .. } => StatusCode::NOT_FOUND,
            ArithmeticError::UnknownOperation(_)
            | ArithmeticError::DifficultyOutOfRange { .. } => StatusCode::BAD_REQUEST,
            ArithmeticError::Database(_) | ArithmeticError::Shared(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ArithmeticError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status.is_server_error() {
            shared::app_error!("Request failed: {}", self);
            "Something went wrong on our side. Please try again.".to_string()
        } else {
            shared::app_warn!("Rejected request: {}", self);
            self.to_string()
        };

        let body = format!(
            "<!DOCTYPE html><html><head><title>Error</title></head><body>\
             <h1>{}</h1><p>{}</p><p><a href=\"/\">Back to home</a></p></body></html>",
            status,
            message
        );
        (status, Html(body)).into_response()
    }
}

pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

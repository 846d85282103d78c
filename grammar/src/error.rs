//! Grammar quiz error types

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use shared::SharedError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrammarError {
    #[error("Invalid request: {details}")]
    InvalidRequest { details: String },

    #[error("Failed to read corpus {path}: {source}")]
    CorpusUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corpus {path} contains no sentences")]
    EmptyCorpus { path: PathBuf },

    #[error("Part-of-speech tagger unavailable: {0}")]
    TaggerUnavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Shared component error: {0}")]
    Shared(#[from] SharedError),
}

impl GrammarError {
    pub fn invalid(details: impl Into<String>) -> Self {
        Self::InvalidRequest {
            details: details.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            GrammarError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            GrammarError::CorpusUnreadable { .. }
            | GrammarError::EmptyCorpus { .. }
            | GrammarError::TaggerUnavailable(_)
            | GrammarError::Database(_)
            | GrammarError::Shared(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GrammarError {
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
             <h1>{}</h1><p>{}</p><p><a href=\"/start\">Start a new quiz</a></p></body></html>",
            status, message
        );
        (status, Html(body)).into_response()
    }
}

pub type GrammarResult<T> = Result<T, GrammarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            GrammarError::invalid("bad count").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GrammarError::EmptyCorpus { path: "empty.txt".into() }.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_errors_keep_details() {
        let err = GrammarError::invalid("Number of questions must be a whole number.");
        assert!(err.to_string().contains("whole number"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}

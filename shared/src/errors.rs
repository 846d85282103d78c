//! Shared error types for the learning apps

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Template rendering failed: {0}")]
    TemplateError(#[from] tera::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Server startup failed on {addr}: {message}")]
    ServerStartup { addr: String, message: String },
}

impl SharedError {
    pub fn config(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            value: value.into(),
        }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;

//! Arithmetic quiz web app
//!
//! Generates addition and multiplication problems, keeps quiz progress in a
//! cookie-addressed session, stores finished quizzes in SQLite and exports
//! a user's history as CSV.

pub mod core;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;

// Re-export main types
pub use error::{ArithmeticError, ArithmeticResult};
pub use services::SqliteResultStore;
pub use state::{AppState, DEFAULT_MAX_QUESTIONS, load_templates};
pub use traits::{MockResultStore, ResultStore};
pub use web::build_router;

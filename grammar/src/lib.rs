//! Parts-of-speech quiz web app
//!
//! Samples sentences from a text corpus, tags them with the nlprule English tagger,
//! asks for the part of speech of one word per sentence and keeps a table
//! of scores that can be listed or downloaded as CSV.

pub mod core;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;

pub use error::{GrammarError, GrammarResult};
pub use services::SqliteScoreStore;
pub use state::{AppState, DEFAULT_MAX_QUESTIONS, RECENT_SCORES, load_templates};
pub use traits::{MockScoreStore, ScoreStore};
pub use web::build_router;

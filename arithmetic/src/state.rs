//! Application state shared by all handlers

use shared::{SessionStore, SharedResult, Templates};
use std::sync::Arc;
use std::time::Duration;

use crate::core::QuizSession;
use crate::traits::ResultStore;

pub const DEFAULT_MAX_QUESTIONS: u32 = 50;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("quiz.html", include_str!("../templates/quiz.html")),
    ("quiz_question.html", include_str!("../templates/quiz_question.html")),
    ("results.html", include_str!("../templates/results.html")),
];

/// Compile the embedded page templates
pub fn load_templates() -> SharedResult<Templates> {
    Templates::from_sources(TEMPLATES)
}

#[derive(Clone)]
pub struct AppState {
    pub templates: Templates,
    pub store: Arc<dyn ResultStore>,
    pub sessions: SessionStore<QuizSession>,
    pub max_questions: u32,
}

impl AppState {
    pub fn new(templates: Templates, store: Arc<dyn ResultStore>, max_questions: u32) -> Self {
        Self {
            templates,
            store,
            sessions: SessionStore::new(),
            max_questions,
        }
    }

    /// Drop sessions that sit unused for `idle`
    pub fn with_session_idle(mut self, idle: Duration) -> Self {
        self.sessions = SessionStore::with_idle_timeout(idle);
        self
    }
}

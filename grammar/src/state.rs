//! Application state shared by all handlers

use rand::SeedableRng;
use rand::rngs::StdRng;
use shared::{SessionStore, SharedResult, Templates};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::core::{Corpus, GrammarQuiz, PosTagger};
use crate::traits::ScoreStore;

pub const DEFAULT_MAX_QUESTIONS: u32 = 25;

/// Rows shown on the recent scores page and in the export
pub const RECENT_SCORES: u32 = 10;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("start.html", include_str!("../templates/start.html")),
    ("quiz.html", include_str!("../templates/quiz.html")),
    ("recent_scores.html", include_str!("../templates/recent_scores.html")),
    ("result.html", include_str!("../templates/result.html")),
];

pub fn load_templates() -> SharedResult<Templates> {
    Templates::from_sources(TEMPLATES)
}

#[derive(Clone)]
pub struct AppState {
    pub templates: Templates,
    pub store: Arc<dyn ScoreStore>,
    pub tagger: Arc<dyn PosTagger>,
    pub corpus: Arc<Corpus>,
    pub sessions: SessionStore<GrammarQuiz>,
    pub max_questions: u32,
    rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    /// A fixed `seed` makes sentence sampling reproducible
    pub fn new(
        templates: Templates,
        store: Arc<dyn ScoreStore>,
        tagger: Arc<dyn PosTagger>,
        corpus: Corpus,
        max_questions: u32,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            templates,
            store,
            tagger,
            corpus: Arc::new(corpus),
            sessions: SessionStore::new(),
            max_questions,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// The sampling RNG. A panic while it was held leaves it usable.
    pub fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Drop sessions that sit unused for `idle`
    pub fn with_session_idle(mut self, idle: Duration) -> Self {
        self.sessions = SessionStore::with_idle_timeout(idle);
        self
    }
}

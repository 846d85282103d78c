//! Application state shared by all handlers

use shared::{SessionStore, SharedResult, Templates};
use std::sync::Arc;
use std::time::Duration;

use crate::core::Dataset;

/// 10 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
];

pub fn load_templates() -> SharedResult<Templates> {
    Templates::from_sources(TEMPLATES)
}

/// The last file a visitor uploaded
#[derive(Debug)]
pub struct UploadedDataset {
    pub filename: String,
    pub dataset: Dataset,
}

#[derive(Clone)]
pub struct AppState {
    pub templates: Templates,
    pub sessions: SessionStore<Arc<UploadedDataset>>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(templates: Templates, max_upload_bytes: usize) -> Self {
        Self {
            templates,
            sessions: SessionStore::new(),
            max_upload_bytes,
        }
    }

    /// Drop sessions that sit unused for `idle`
    pub fn with_session_idle(mut self, idle: Duration) -> Self {
        self.sessions = SessionStore::with_idle_timeout(idle);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_compile() {
        let templates = load_templates().unwrap();
        assert!(templates.names().contains(&"index.html"));
    }
}

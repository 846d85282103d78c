//! Core identifiers shared by every app

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Global app id singleton - set once at startup
static APP_ID: OnceLock<AppId> = OnceLock::new();

static UNINITIALISED: AppId = AppId::Unknown;

/// Identifies which of the learning apps is running in this process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppId {
    /// CSV upload dashboard
    Dashboard,
    /// Arithmetic quiz
    Arithmetic,
    /// Parts-of-speech quiz
    Grammar,
    /// Not yet initialised (library use and tests)
    Unknown,
}

impl AppId {
    /// Initialize the global app id. The first call wins.
    pub fn init(app: AppId) -> &'static AppId {
        APP_ID.get_or_init(|| app)
    }

    /// Get the global app id, `Unknown` until `init` has been called
    pub fn current() -> &'static AppId {
        APP_ID.get().unwrap_or(&UNINITIALISED)
    }

    /// Crate name used as the tracing target for this app
    pub fn target(&self) -> &'static str {
        match self {
            AppId::Dashboard => "dashboard",
            AppId::Arithmetic => "arithmetic",
            AppId::Grammar => "grammar",
            AppId::Unknown => "shared",
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_id_display() {
        assert_eq!(AppId::Dashboard.to_string(), "dashboard");
        assert_eq!(AppId::Arithmetic.to_string(), "arithmetic");
        assert_eq!(AppId::Grammar.to_string(), "grammar");
        assert_eq!(AppId::Unknown.to_string(), "shared");
    }
}

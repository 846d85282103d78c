//! Shared logging utilities for consistent tracing across all apps

use crate::types::AppId;
use chrono::{DateTime, Utc};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

/// Build the default filter directive for an app at the given level
pub fn filter_directive(app: &AppId, log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    let target = app.target();

    if target == "shared" {
        format!("shared={base_level},tower_http={base_level},sqlx=warn")
    } else {
        format!("{target}={base_level},shared={base_level},tower_http={base_level},sqlx=warn")
    }
}

/// Initialize the stdout tracing subscriber for the current app.
/// `RUST_LOG` takes precedence over the derived directive when set.
pub fn init_tracing(log_level: Option<&str>) {
    let app = AppId::current();
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(app, log_level)));

    // try_init so tests and repeated calls don't panic
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for app-aware info logging
#[macro_export]
macro_rules! app_info {
    ($($arg:tt)*) => {
        tracing::info!(
            app = %$crate::AppId::current(),
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for app-aware warning logging
#[macro_export]
macro_rules! app_warn {
    ($($arg:tt)*) => {
        tracing::warn!(
            app = %$crate::AppId::current(),
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for app-aware error logging
#[macro_export]
macro_rules! app_error {
    ($($arg:tt)*) => {
        tracing::error!(
            app = %$crate::AppId::current(),
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for app-aware debug logging
#[macro_export]
macro_rules! app_debug {
    ($($arg:tt)*) => {
        tracing::debug!(
            app = %$crate::AppId::current(),
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(app: &AppId, details: &str) {
    info!(
        app = %app,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(app: &AppId, reason: &str) {
    info!(
        app = %app,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(app: &AppId, context: &str, error: &dyn std::fmt::Display) {
    error!(
        app = %app,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(app: &AppId, message: &str) {
    info!(
        app = %app,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}

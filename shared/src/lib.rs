//! Shared plumbing for the learning apps
//!
//! Logging, errors, sessions, templates, SQLite access, CSV downloads and
//! server bootstrap used by the dashboard, arithmetic and grammar apps.

pub mod config;
pub mod csv_export;
pub mod db;
pub mod errors;
pub mod logging;
pub mod score;
pub mod server;
pub mod session;
pub mod templates;
pub mod types;

pub use config::ServerArgs;
pub use csv_export::{CsvAttachment, write_csv};
pub use errors::*;
pub use session::SessionStore;
pub use templates::Templates;
pub use types::*;

// Re-exported so apps don't need direct dependencies for these
pub use tera::Context;
pub use tower_cookies::{CookieManagerLayer, Cookies};
pub use uuid::Uuid;

//! CSV upload dashboard
//!
//! Visitors upload a CSV file, get a table preview and pick two columns and
//! a chart type; the page asks `/chart` for a Plotly figure and draws it in
//! the browser.

pub mod core;
pub mod error;
pub mod state;
pub mod web;

pub use error::{DashboardError, DashboardResult};
pub use state::{AppState, DEFAULT_MAX_UPLOAD_BYTES, UploadedDataset, load_templates};
pub use web::build_router;

//! Service implementations
//!
//! Real implementations of the service traits for production use

pub mod result_store;

pub use result_store::SqliteResultStore;

//! Cloud Service Catalog Library
//!
//! This library provides the catalog store, the query service and the HTTP
//! router. It can be used independently of the main binary for testing or
//! embedding the API into another server.

pub mod config;
pub mod error;
pub mod handlers;
pub mod infrastructure;
pub mod models;
pub mod router;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use infrastructure::catalog_store::Catalog;
pub use models::*;
pub use state::AppState;

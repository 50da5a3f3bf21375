//! Application state management
//!
//! This module defines the application state shared across all handlers.
//! The catalog is loaded once at startup and never mutated, so handlers
//! read it concurrently without any locking.

use std::sync::Arc;

use crate::infrastructure::catalog_store::Catalog;

/// Global application state
///
/// Cheap to clone: handlers receive a copy of the `Arc` per request.
#[derive(Clone)]
pub struct AppState {
    /// Immutable catalog snapshot
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// State backed by the catalog compiled into the binary
    pub fn embedded() -> crate::error::Result<Self> {
        Ok(Self::new(Catalog::embedded()?))
    }
}

//! Health reporting
//!
//! The catalog is loaded before the server starts accepting requests, so a
//! running instance is always healthy; the report carries the catalog size
//! so an empty or truncated catalog is visible to health checks.

use crate::infrastructure::catalog_store::Catalog;
use crate::models::HealthReport;

pub fn health_report(catalog: &Catalog) -> HealthReport {
    HealthReport {
        status: "healthy",
        services_count: catalog.len(),
    }
}

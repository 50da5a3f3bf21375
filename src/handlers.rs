//! HTTP request handlers
//!
//! This module contains all the HTTP endpoint handlers. Each handler extracts
//! request parameters, calls the query service and serializes the result.
//! No filtering logic lives here.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::error::CatalogError;
use crate::models::*;
use crate::services::{health_service, query_service};
use crate::state::AppState;

/// Root endpoint - API summary
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Cloud Service Catalog API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/api/services": "Get all services, filtered by category, free_tier and search",
            "/api/services/{service_id}": "Get specific service details",
            "/api/services/category/{category}": "Get services by category",
            "/api/categories": "Get all service categories",
            "/api/compare": "Compare services given comma-separated service_ids",
            "/health": "Health check"
        }
    }))
}

/// List services with optional filtering
///
/// Query parameters:
/// - `category`: exact category name, rejected with 400 when unknown
/// - `free_tier`: `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`, any case
/// - `search`: case-insensitive substring of name or description
pub async fn list_services(
    State(state): State<AppState>,
    query: Result<Query<FilterCriteria>, QueryRejection>,
) -> Result<Response, CatalogError> {
    let Query(criteria) = query?;
    let response = query_service::filter_services(&state.catalog, &criteria)?;
    Ok(Json(response).into_response())
}

pub async fn get_service(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
) -> Result<Response, CatalogError> {
    let service = query_service::service_by_id(&state.catalog, &service_id)?;
    Ok(Json(service).into_response())
}

pub async fn services_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Response, CatalogError> {
    let services = query_service::services_in_category(&state.catalog, &category)?;
    Ok(Json(services).into_response())
}

pub async fn list_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state.catalog.categories(),
    })
}

/// Compare two or more services side by side
///
/// `service_ids` is a comma-separated list; whitespace around each id is
/// ignored.
pub async fn compare_services(
    State(state): State<AppState>,
    query: Result<Query<CompareQuery>, QueryRejection>,
) -> Result<Response, CatalogError> {
    let Query(query) = query?;
    let ids = query_service::parse_service_ids(&query.service_ids);
    let comparison = query_service::compare_services(&state.catalog, &ids)?;
    Ok(Json(comparison).into_response())
}

pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(health_service::health_report(&state.catalog))
}

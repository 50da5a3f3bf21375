//! Catalog queries
//!
//! Every HTTP entry point goes through these functions, so filtering,
//! category validation and comparison rules live in exactly one place.

use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::infrastructure::catalog_store::Catalog;
use crate::models::*;

/// Labels returned with every comparison, in display order
pub const COMPARISON_CRITERIA: [&str; 7] = [
    "Category",
    "Key Features",
    "Pricing Models",
    "Use Cases",
    "Limitations",
    "Free Tier Available",
    "Region Availability",
];

/// Minimum number of resolved services for a comparison
pub const MIN_COMPARISON_SERVICES: usize = 2;

/// Empty query values count as "not supplied"
fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn parse_category(raw: &str) -> Result<Category> {
    raw.parse::<Category>().map_err(CatalogError::InvalidCategory)
}

/// Filter the catalog by category, free tier and free-text search
///
/// Filters compose with AND; an absent filter is a no-op. The category is
/// validated before any record is examined, so an invalid value never
/// yields a partial list. Surviving records keep catalog order.
pub fn filter_services<'a>(
    catalog: &'a Catalog,
    criteria: &FilterCriteria,
) -> Result<ServicesResponse<'a>> {
    let category = supplied(&criteria.category).map(parse_category).transpose()?;
    let search = supplied(&criteria.search).map(str::to_lowercase);

    let services: Vec<&ServiceRecord> = catalog
        .all()
        .iter()
        .filter(|service| category.map_or(true, |c| service.category == c))
        .filter(|service| {
            criteria
                .free_tier
                .map_or(true, |free| service.free_tier_available == free)
        })
        .filter(|service| {
            search
                .as_deref()
                .map_or(true, |term| matches_search(service, term))
        })
        .collect();

    debug!(
        "filter {:?} matched {} of {} services",
        criteria,
        services.len(),
        catalog.len()
    );

    Ok(ServicesResponse {
        total_count: services.len(),
        services,
        categories: catalog.categories(),
    })
}

/// `term` must already be lower-cased
fn matches_search(service: &ServiceRecord, term: &str) -> bool {
    service.name.to_lowercase().contains(term) || service.description.to_lowercase().contains(term)
}

pub fn service_by_id<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a ServiceRecord> {
    catalog
        .by_id(id)
        .ok_or_else(|| CatalogError::NotFound(id.to_string()))
}

pub fn services_in_category<'a>(catalog: &'a Catalog, raw: &str) -> Result<Vec<&'a ServiceRecord>> {
    let category = parse_category(raw)?;
    Ok(catalog.by_category(category))
}

/// Split a comma-separated id list, trimming each id
///
/// Empty segments are kept so they surface as unknown ids.
pub fn parse_service_ids(raw: &str) -> Vec<String> {
    raw.split(',').map(|id| id.trim().to_string()).collect()
}

/// Resolve every id, then require at least two services
///
/// Lookup is all-or-nothing: the first unknown id aborts the comparison,
/// and the cardinality check only runs once every id has resolved.
/// Services come back in the order the ids were given.
pub fn compare_services<'a, S: AsRef<str>>(
    catalog: &'a Catalog,
    ids: &[S],
) -> Result<ComparisonResponse<'a>> {
    let services = ids
        .iter()
        .map(|id| service_by_id(catalog, id.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    if services.len() < MIN_COMPARISON_SERVICES {
        return Err(CatalogError::InsufficientServices(services.len()));
    }

    Ok(ComparisonResponse {
        comparison_count: services.len(),
        services,
        comparison_criteria: &COMPARISON_CRITERIA,
    })
}

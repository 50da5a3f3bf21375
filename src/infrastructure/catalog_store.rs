//! In-memory catalog of service records
//!
//! The catalog is built once at startup, either from the data set embedded
//! in the binary or from a JSON file, and is read-only afterwards.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{CatalogError, Result};
use crate::models::{Category, ServiceRecord};

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug)]
pub struct Catalog {
    services: Vec<ServiceRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from records in load order, rejecting duplicate ids
    pub fn new(services: Vec<ServiceRecord>) -> Result<Self> {
        let mut index = HashMap::with_capacity(services.len());
        for (position, service) in services.iter().enumerate() {
            if index.insert(service.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateServiceId(service.id.clone()));
            }
        }
        Ok(Self { services, index })
    }

    /// Parse a JSON array of service records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let services: Vec<ServiceRecord> = serde_json::from_str(json)?;
        Self::new(services)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The data set compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_CATALOG)
    }

    pub fn all(&self) -> &[ServiceRecord] {
        &self.services
    }

    pub fn by_id(&self, id: &str) -> Option<&ServiceRecord> {
        self.index.get(id).map(|&position| &self.services[position])
    }

    pub fn by_category(&self, category: Category) -> Vec<&ServiceRecord> {
        self.services
            .iter()
            .filter(|service| service.category == category)
            .collect()
    }

    /// Every defined category, populated or not
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

//! Domain models and data structures
//!
//! This module contains all the core data types used throughout the application.
//! These are "pure" data structures without business logic.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Service category
///
/// Serializes to its display string (e.g. `"Machine Learning"`). Declaration
/// order is the canonical enumeration order returned by `Category::ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Compute")]
    Compute,
    #[serde(rename = "Storage")]
    Storage,
    #[serde(rename = "Database")]
    Database,
    #[serde(rename = "Networking")]
    Networking,
    #[serde(rename = "Security")]
    Security,
    #[serde(rename = "Analytics")]
    Analytics,
    #[serde(rename = "Machine Learning")]
    MachineLearning,
    #[serde(rename = "Containers")]
    Containers,
    #[serde(rename = "Serverless")]
    Serverless,
    #[serde(rename = "Developer Tools")]
    DeveloperTools,
    #[serde(rename = "Management & Governance")]
    Management,
    #[serde(rename = "Internet of Things")]
    Iot,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Compute,
        Category::Storage,
        Category::Database,
        Category::Networking,
        Category::Security,
        Category::Analytics,
        Category::MachineLearning,
        Category::Containers,
        Category::Serverless,
        Category::DeveloperTools,
        Category::Management,
        Category::Iot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Compute => "Compute",
            Category::Storage => "Storage",
            Category::Database => "Database",
            Category::Networking => "Networking",
            Category::Security => "Security",
            Category::Analytics => "Analytics",
            Category::MachineLearning => "Machine Learning",
            Category::Containers => "Containers",
            Category::Serverless => "Serverless",
            Category::DeveloperTools => "Developer Tools",
            Category::Management => "Management & Governance",
            Category::Iot => "Internet of Things",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw category strings are matched exactly against the display names.
/// The error carries the offending input back to the caller.
impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Pricing model offered by a service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricingModel {
    #[serde(rename = "On-Demand")]
    OnDemand,
    #[serde(rename = "Reserved Instances")]
    Reserved,
    #[serde(rename = "Spot Pricing")]
    Spot,
    #[serde(rename = "Free Tier")]
    FreeTier,
    #[serde(rename = "Pay-per-use")]
    PayPerUse,
}

fn default_region_availability() -> String {
    "Most AWS regions".to_string()
}

/// Pricing models form a set; repeated entries keep their first position.
fn dedup_pricing_models<'de, D>(deserializer: D) -> Result<Vec<PricingModel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<PricingModel>::deserialize(deserializer)?;
    let mut models = Vec::with_capacity(raw.len());
    for model in raw {
        if !models.contains(&model) {
            models.push(model);
        }
    }
    Ok(models)
}

/// Boolean query flag spellings, matched case-insensitively
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "on" | "t" => Some(true),
        "false" | "0" | "no" | "n" | "off" | "f" => Some(false),
        _ => None,
    }
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            parse_flag(&raw)
                .ok_or_else(|| de::Error::custom(format!("invalid boolean value `{}`", raw)))
        })
        .transpose()
}

/// One cataloged cloud service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub key_features: Vec<String>,
    pub pricing_notes: String,
    #[serde(deserialize_with = "dedup_pricing_models")]
    pub pricing_models: Vec<PricingModel>,
    pub use_cases: Vec<String>,
    #[serde(default)]
    pub limitations: Vec<String>,
    #[serde(default)]
    pub free_tier_available: bool,
    #[serde(default = "default_region_availability")]
    pub region_availability: String,
    #[serde(default)]
    pub documentation_url: Option<String>,
}

/// Query parameters accepted by the services listing
///
/// `category` stays a raw string here; it is validated by the query service
/// so an unknown value is reported instead of silently dropped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterCriteria {
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub free_tier: Option<bool>,
    pub search: Option<String>,
}

/// Query parameters for the comparison endpoint
#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    /// Comma-separated service ids
    pub service_ids: String,
}

/// Filtered listing of services
#[derive(Debug, Serialize)]
pub struct ServicesResponse<'a> {
    pub services: Vec<&'a ServiceRecord>,
    pub total_count: usize,
    pub categories: &'static [Category],
}

/// Side-by-side comparison of two or more services
#[derive(Debug, Serialize)]
pub struct ComparisonResponse<'a> {
    pub services: Vec<&'a ServiceRecord>,
    pub comparison_criteria: &'static [&'static str],
    pub comparison_count: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: &'static [Category],
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub services_count: usize,
}

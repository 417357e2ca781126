//! Reference data types.
//!
//! This module contains the strongly-typed structures deserialized from the
//! YAML reference files, and the validated [`ReferenceTable`] built from them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::error::{EngineError, EngineResult};

/// Metadata about the wage survey the reference means come from.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetMetadata {
    /// Short dataset name used in user-facing text (e.g., "PLFS 2023-24").
    pub name: String,
    /// Full name of the publication.
    pub source: String,
    /// The survey indicator the means are taken from.
    pub indicator: String,
    /// Human name of the nation the national mean describes.
    pub nation: String,
    /// Currency symbol prefixed to formatted amounts.
    pub currency_symbol: String,
    /// Publication date of the survey report.
    pub published: NaiveDate,
    /// URL to the publishing agency.
    pub source_url: String,
}

/// Mean monthly wage for a comparison context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RegionMean {
    /// Rural and urban combined mean monthly wage.
    pub mean: u64,
    /// Urban-only mean monthly wage, where the survey publishes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urban_mean: Option<u64>,
}

/// Regions configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionsConfig {
    /// The national reference.
    pub national: RegionMean,
    /// Map of region name to its reference.
    pub regions: BTreeMap<String, RegionMean>,
}

/// An industry sector and its wage multiplier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Industry {
    /// Short case-sensitive key carried in query strings (e.g., "IT").
    pub key: String,
    /// Human-readable label.
    pub label: String,
    /// Emoji shown next to the label.
    pub emoji: String,
    /// Sector mean wage relative to the national mean.
    pub multiplier: Decimal,
    /// Examples of what the sector covers.
    pub description: String,
}

/// Industries configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct IndustriesConfig {
    /// Key of the entry used when an industry key does not resolve.
    pub default_industry: String,
    /// Industries in display order.
    pub industries: Vec<Industry>,
}

/// A region lookup after fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRegion<'a> {
    /// The region's name, or the nation's when the lookup fell back.
    pub name: &'a str,
    /// Mean monthly wage compared against.
    pub mean: u64,
    /// Whether the name resolved to a listed region.
    pub matched: bool,
}

/// The complete, validated reference table.
///
/// Every mean is positive, every multiplier is positive, industry keys are
/// unique, and the default industry exists with a multiplier of exactly 1.0.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    dataset: DatasetMetadata,
    national: RegionMean,
    regions: BTreeMap<String, RegionMean>,
    industries: Vec<Industry>,
    default_industry: usize,
}

impl ReferenceTable {
    /// Builds a reference table, checking its invariants.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReferenceTable` if any mean or multiplier is not
    /// positive, an industry key is repeated, or the default industry is
    /// missing or not neutral.
    pub fn new(
        dataset: DatasetMetadata,
        regions: RegionsConfig,
        industries: IndustriesConfig,
    ) -> EngineResult<Self> {
        if regions.national.mean == 0 {
            return Err(invalid("national mean must be positive"));
        }

        if let Some((name, _)) = regions.regions.iter().find(|(_, r)| r.mean == 0) {
            return Err(invalid(format!("mean for region '{}' must be positive", name)));
        }

        let mut seen = HashSet::new();
        for industry in &industries.industries {
            if !seen.insert(industry.key.as_str()) {
                return Err(invalid(format!("duplicate industry key '{}'", industry.key)));
            }
            if industry.multiplier <= Decimal::ZERO {
                return Err(invalid(format!(
                    "multiplier for industry '{}' must be positive",
                    industry.key
                )));
            }
        }

        let default_industry = industries
            .industries
            .iter()
            .position(|i| i.key == industries.default_industry)
            .ok_or_else(|| {
                invalid(format!(
                    "default industry '{}' is not listed",
                    industries.default_industry
                ))
            })?;

        if industries.industries[default_industry].multiplier != Decimal::ONE {
            return Err(invalid(format!(
                "default industry '{}' must have multiplier 1.0",
                industries.default_industry
            )));
        }

        Ok(Self {
            dataset,
            national: regions.national,
            regions: regions.regions,
            industries: industries.industries,
            default_industry,
        })
    }

    /// Returns the dataset metadata.
    pub fn dataset(&self) -> &DatasetMetadata {
        &self.dataset
    }

    /// Returns the national reference.
    pub fn national(&self) -> &RegionMean {
        &self.national
    }

    /// Returns the national mean monthly wage.
    pub fn national_mean(&self) -> u64 {
        self.national.mean
    }

    /// Returns all regions, ordered by name.
    pub fn regions(&self) -> &BTreeMap<String, RegionMean> {
        &self.regions
    }

    /// Returns region names in sorted order.
    pub fn region_names(&self) -> Vec<&str> {
        self.regions.keys().map(String::as_str).collect()
    }

    /// Looks up a region by exact name.
    pub fn region(&self, name: &str) -> Option<&RegionMean> {
        self.regions.get(name)
    }

    /// Looks up a region's mean by exact name.
    pub fn region_mean(&self, name: &str) -> Option<u64> {
        self.region(name).map(|r| r.mean)
    }

    /// Resolves a region by exact name, falling back to the national reference.
    ///
    /// A fallback is named after the nation and has `matched` unset.
    pub fn resolve_region<'a>(&'a self, name: &'a str) -> ResolvedRegion<'a> {
        match self.regions.get(name) {
            Some(region) => ResolvedRegion {
                name,
                mean: region.mean,
                matched: true,
            },
            None => ResolvedRegion {
                name: &self.dataset.nation,
                mean: self.national.mean,
                matched: false,
            },
        }
    }

    /// Returns all industries in display order.
    pub fn industries(&self) -> &[Industry] {
        &self.industries
    }

    /// Looks up an industry by exact, case-sensitive key.
    pub fn industry(&self, key: &str) -> Option<&Industry> {
        self.industries.iter().find(|i| i.key == key)
    }

    /// Returns the neutral industry used as a fallback.
    pub fn default_industry(&self) -> &Industry {
        &self.industries[self.default_industry]
    }

    /// Returns the industry for `key`, or the default industry if it does not resolve.
    pub fn resolve_industry(&self, key: &str) -> &Industry {
        self.industry(key).unwrap_or_else(|| self.default_industry())
    }
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidReferenceTable {
        message: message.into(),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_valid_table_builds() {
        let table = table();
        assert_eq!(table.national_mean(), 20702);
        assert_eq!(table.region_names(), vec!["Maharashtra", "Punjab"]);
        assert_eq!(table.default_industry().key, "OTHER");
    }

    #[test]
    fn test_resolve_region_falls_back_to_national() {
        let table = table();

        let found = table.resolve_region("Maharashtra");
        assert_eq!(found.name, "Maharashtra");
        assert_eq!(found.mean, 23840);
        assert!(found.matched);

        let fallback = table.resolve_region("Atlantis");
        assert_eq!(fallback.name, "India");
        assert_eq!(fallback.mean, 20702);
        assert!(!fallback.matched);

        assert!(!table.resolve_region("maharashtra").matched);
        assert!(!table.resolve_region("").matched);
    }

    #[test]
    fn test_resolve_industry_is_case_sensitive_and_falls_back() {
        let table = table();
        assert_eq!(table.resolve_industry("IT").key, "IT");
        assert_eq!(table.resolve_industry("it").key, "OTHER");
        assert_eq!(table.resolve_industry("").key, "OTHER");
    }

    #[test]
    fn test_zero_national_mean_is_rejected() {
        let mut regions = regions();
        regions.national.mean = 0;
        let result = ReferenceTable::new(dataset(), regions, industries());
        assert!(matches!(
            result,
            Err(EngineError::InvalidReferenceTable { .. })
        ));
    }

    #[test]
    fn test_zero_region_mean_is_rejected() {
        let mut regions = regions();
        regions.regions.insert(
            "Empty".to_string(),
            RegionMean {
                mean: 0,
                urban_mean: None,
            },
        );
        match ReferenceTable::new(dataset(), regions, industries()) {
            Err(EngineError::InvalidReferenceTable { message }) => {
                assert!(message.contains("Empty"));
            }
            other => panic!("Expected InvalidReferenceTable, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_default_industry_is_rejected() {
        let mut industries = industries();
        industries.default_industry = "NONE".to_string();
        match ReferenceTable::new(dataset(), regions(), industries) {
            Err(EngineError::InvalidReferenceTable { message }) => {
                assert!(message.contains("NONE"));
            }
            other => panic!("Expected InvalidReferenceTable, got {:?}", other),
        }
    }

    #[test]
    fn test_non_neutral_default_industry_is_rejected() {
        let mut industries = industries();
        industries.default_industry = "IT".to_string();
        assert!(ReferenceTable::new(dataset(), regions(), industries).is_err());
    }

    #[test]
    fn test_duplicate_industry_key_is_rejected() {
        let mut industries = industries();
        industries.industries.push(industry("IT", "1.5"));
        match ReferenceTable::new(dataset(), regions(), industries) {
            Err(EngineError::InvalidReferenceTable { message }) => {
                assert!(message.contains("duplicate"));
            }
            other => panic!("Expected InvalidReferenceTable, got {:?}", other),
        }
    }

    #[test]
    fn test_non_positive_multiplier_is_rejected() {
        let mut industries = industries();
        industries.industries.push(industry("VOID", "0"));
        assert!(ReferenceTable::new(dataset(), regions(), industries).is_err());
    }
}

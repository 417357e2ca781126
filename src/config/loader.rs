//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the reference
//! table from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{DatasetMetadata, IndustriesConfig, ReferenceTable, RegionsConfig};

/// Loads and provides access to the reference table.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/plfs_2023_24/
/// ├── dataset.yaml     # Survey metadata and nation label
/// ├── regions.yaml     # National and per-region mean wages
/// └── industries.yaml  # Industry multipliers and the default industry
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_rank::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/plfs_2023_24").unwrap();
/// let region = loader.table().resolve_region("Karnataka");
/// println!("{} mean: {}", region.name, region.mean);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    table: ReferenceTable,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - The data violates a table invariant (`InvalidReferenceTable`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let dataset = Self::load_yaml::<DatasetMetadata>(&path.join("dataset.yaml"))?;
        let regions = Self::load_yaml::<RegionsConfig>(&path.join("regions.yaml"))?;
        let industries = Self::load_yaml::<IndustriesConfig>(&path.join("industries.yaml"))?;

        let table = ReferenceTable::new(dataset, regions, industries)?;

        tracing::debug!(
            dataset = %table.dataset().name,
            regions = table.regions().len(),
            industries = table.industries().len(),
            "Reference table loaded"
        );

        Ok(Self { table })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded reference table.
    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }

    /// Returns the dataset metadata.
    pub fn dataset(&self) -> &DatasetMetadata {
        self.table.dataset()
    }

    /// Consumes the loader, returning the reference table.
    pub fn into_table(self) -> ReferenceTable {
        self.table
    }
}

//! Reference table loading and lookup.
//!
//! Reference data (national and regional mean wages, industry multipliers and
//! dataset metadata) is loaded once from a directory of YAML files and never
//! mutated afterwards.
//!
//! # Example
//!
//! ```no_run
//! use salary_rank::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/plfs_2023_24").unwrap();
//! println!("Loaded dataset: {}", loader.dataset().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DatasetMetadata, Industry, IndustriesConfig, ReferenceTable, RegionMean, RegionsConfig,
    ResolvedRegion,
};

#[cfg(test)]
pub(crate) use types::test_support;

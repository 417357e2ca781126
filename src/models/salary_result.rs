//! Salary result models.
//!
//! This module contains the [`SalaryResult`] record produced by the estimator
//! and the per-context [`Comparison`] it is built from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The reference context a comparison was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonContext {
    /// The national mean wage.
    Nation,
    /// The resolved region's mean wage.
    Region,
    /// The national mean scaled by the industry multiplier.
    Industry,
}

/// A salary compared against one reference mean.
///
/// # Example
///
/// ```
/// use salary_rank::models::Comparison;
/// use rust_decimal::Decimal;
///
/// let comparison = Comparison {
///     reference_mean: 20702,
///     percentile: 89,
///     multiplier: Decimal::new(20, 1),
/// };
/// assert_eq!(comparison.multiplier.to_string(), "2.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// The reference mean monthly wage, in whole currency units.
    pub reference_mean: u64,
    /// Estimated percentile rank, always within 1..=99.
    pub percentile: u8,
    /// Salary divided by the reference mean, rounded to one decimal.
    pub multiplier: Decimal,
}

/// The full result of ranking a salary in every context.
///
/// Purely derived from a [`SalaryQuery`](super::SalaryQuery) and the reference
/// table; recomputed on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryResult {
    /// Comparison against the national mean.
    pub nation: Comparison,
    /// Comparison against the region's mean (national mean when unresolved).
    pub region: Comparison,
    /// Comparison against the industry-adjusted national mean.
    pub industry: Comparison,
    /// Which context the headline figures come from.
    pub headline_context: ComparisonContext,
    /// The percentile shown most prominently.
    pub headline_percentile: u8,
    /// Human label for the headline (e.g., "in Karnataka").
    ///
    /// Names the nation ("in India") when the region did not resolve.
    pub headline_label: String,
    /// The region name compared against, or the nation when unresolved.
    pub region_name: String,
    /// Whether the requested region was found in the reference table.
    pub region_matched: bool,
    /// The resolved industry key (the default key when unresolved).
    pub industry_key: String,
}

impl SalaryResult {
    /// Returns the comparison for the given context.
    pub fn comparison(&self, context: ComparisonContext) -> &Comparison {
        match context {
            ComparisonContext::Nation => &self.nation,
            ComparisonContext::Region => &self.region,
            ComparisonContext::Industry => &self.industry,
        }
    }

    /// Returns the headline comparison.
    pub fn headline(&self) -> &Comparison {
        self.comparison(self.headline_context)
    }
}

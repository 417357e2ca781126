//! Multi-context salary comparison.
//!
//! This module evaluates a [`SalaryQuery`] against the national, regional and
//! industry reference means and assembles the [`SalaryResult`].

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::ReferenceTable;
use crate::models::{Comparison, ComparisonContext, SalaryQuery, SalaryResult};

use super::percentile::{estimate_percentile, salary_multiplier};

/// The context used for the headline figures.
pub const HEADLINE_CONTEXT: ComparisonContext = ComparisonContext::Region;

/// Industry-adjusted reference mean, rounded to whole currency units.
///
/// Rounding happens before the mean is used so that the industry percentile
/// and multiplier are both derived from the same integer.
///
/// # Examples
///
/// ```
/// use salary_rank::calculation::industry_reference_mean;
/// use rust_decimal::Decimal;
///
/// // 20702 × 2.85 = 59000.7
/// assert_eq!(industry_reference_mean(20_702, Decimal::new(285, 2)), 59_001);
/// ```
pub fn industry_reference_mean(national_mean: u64, multiplier: Decimal) -> u64 {
    Decimal::from(national_mean)
        .checked_mul(multiplier)
        .map(|mean| mean.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|mean| mean.to_u64())
        .unwrap_or(national_mean)
}

/// Compares a salary against a single reference mean.
pub fn compare(salary: u64, reference_mean: u64) -> Comparison {
    Comparison {
        reference_mean,
        percentile: estimate_percentile(salary as f64, reference_mean as f64),
        multiplier: salary_multiplier(salary, reference_mean),
    }
}

/// Ranks a salary against the nation, its region and its industry.
///
/// Never fails: a region that does not resolve is compared against the
/// national mean, and an industry that does not resolve uses the table's
/// neutral default industry.
///
/// # Examples
///
/// ```no_run
/// use salary_rank::calculation::compute_result;
/// use salary_rank::config::ConfigLoader;
/// use salary_rank::models::SalaryQuery;
///
/// let loader = ConfigLoader::load("./config/plfs_2023_24")?;
/// let query = SalaryQuery::new(50_000, "Karnataka", "IT");
/// let result = compute_result(&query, loader.table());
/// println!("Headline: {}th percentile {}", result.headline_percentile, result.headline_label);
/// # Ok::<(), salary_rank::error::EngineError>(())
/// ```
pub fn compute_result(query: &SalaryQuery, table: &ReferenceTable) -> SalaryResult {
    let national_mean = table.national_mean();

    let resolved = table.resolve_region(&query.region);

    let industry = table.resolve_industry(&query.industry);
    let industry_mean = industry_reference_mean(national_mean, industry.multiplier);

    let nation = compare(query.salary, national_mean);
    let region = compare(query.salary, resolved.mean);
    let industry_comparison = compare(query.salary, industry_mean);

    let mut result = SalaryResult {
        nation,
        region,
        industry: industry_comparison,
        headline_context: HEADLINE_CONTEXT,
        headline_percentile: 0,
        headline_label: format!("in {}", resolved.name),
        region_name: resolved.name.to_string(),
        region_matched: resolved.matched,
        industry_key: industry.key.clone(),
    };
    result.headline_percentile = result.headline().percentile;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::table;

    fn dec(value: i64, scale: u32) -> Decimal {
        Decimal::new(value, scale)
    }

    #[test]
    fn test_industry_reference_mean_rounds_half_up() {
        assert_eq!(industry_reference_mean(20_702, dec(285, 2)), 59_001);
        assert_eq!(industry_reference_mean(20_702, dec(52, 2)), 10_765);
        assert_eq!(industry_reference_mean(20_702, dec(198, 2)), 40_990);
        assert_eq!(industry_reference_mean(20_702, dec(89, 2)), 18_425);
        assert_eq!(industry_reference_mean(10, dec(25, 2)), 3);
        assert_eq!(industry_reference_mean(20_702, Decimal::ONE), 20_702);
    }

    #[test]
    fn test_compare_builds_comparison() {
        let comparison = compare(41_404, 20_702);
        assert_eq!(comparison.reference_mean, 20_702);
        assert_eq!(comparison.percentile, 89);
        assert_eq!(comparison.multiplier, dec(20, 1));
    }

    #[test]
    fn test_compute_result_for_known_region_and_industry() {
        let table = table();
        let result = compute_result(&SalaryQuery::new(50_000, "Maharashtra", "IT"), &table);

        assert_eq!(result.nation.reference_mean, 20_702);
        assert_eq!(result.nation.percentile, 93);
        assert_eq!(result.nation.multiplier, dec(24, 1));

        assert_eq!(result.region.reference_mean, 23_840);
        assert_eq!(result.region.percentile, 90);
        assert_eq!(result.region.multiplier, dec(21, 1));

        assert_eq!(result.industry.reference_mean, 59_001);
        assert_eq!(result.industry.percentile, 60);
        assert_eq!(result.industry.multiplier, dec(8, 1));

        assert_eq!(result.headline_context, ComparisonContext::Region);
        assert_eq!(result.headline_percentile, 90);
        assert_eq!(result.headline_label, "in Maharashtra");
        assert!(result.region_matched);
        assert_eq!(result.industry_key, "IT");
    }

    #[test]
    fn test_unknown_region_falls_back_to_national() {
        let table = table();
        let result = compute_result(&SalaryQuery::new(50_000, "Atlantis", "IT"), &table);

        assert_eq!(result.region, result.nation);
        assert_eq!(result.headline_percentile, result.nation.percentile);
        assert_eq!(result.headline_label, "in India");
        assert_eq!(result.region_name, "India");
        assert!(!result.region_matched);
    }

    #[test]
    fn test_unknown_industry_matches_national_comparison() {
        let table = table();
        let result = compute_result(&SalaryQuery::new(50_000, "Punjab", "it"), &table);

        assert_eq!(result.industry, result.nation);
        assert_eq!(result.industry.multiplier, dec(24, 1));
        assert_eq!(result.industry_key, "OTHER");
    }

    #[test]
    fn test_zero_salary_is_total() {
        let table = table();
        let result = compute_result(&SalaryQuery::new(0, "Punjab", "IT"), &table);

        assert_eq!(result.nation.percentile, 50);
        assert_eq!(result.region.percentile, 50);
        assert_eq!(result.industry.percentile, 50);
        assert_eq!(result.nation.multiplier, Decimal::ZERO);
    }

    #[test]
    fn test_identical_queries_produce_identical_results() {
        let table = table();
        let query = SalaryQuery::new(37_250, "Maharashtra", "AGRICULTURE");
        assert_eq!(compute_result(&query, &table), compute_result(&query, &table));
    }
}

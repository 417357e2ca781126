//! Percentile estimation against a single reference mean.
//!
//! This module converts a salary and a reference mean wage into a percentile
//! rank under the log-normal wage model, and computes the salary multiplier.

use rust_decimal::{Decimal, RoundingStrategy};

use super::distribution::LogNormal;

/// Lowest percentile ever reported.
pub const MIN_PERCENTILE: u8 = 1;

/// Highest percentile ever reported.
pub const MAX_PERCENTILE: u8 = 99;

/// Percentile reported for non-positive or non-numeric inputs.
pub const DEGENERATE_PERCENTILE: u8 = 50;

/// The intermediate values of a single percentile estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentileEstimate {
    /// Location of the calibrated distribution, `ln(mean) - SIGMA² / 2`.
    pub mu: f64,
    /// Standardized variate of the salary.
    pub z_score: f64,
    /// Cumulative probability before rounding and clamping, in `[0, 1]`.
    pub probability: f64,
    /// The reported percentile.
    pub percentile: u8,
}

/// Estimates a percentile and returns the intermediate values.
///
/// Returns `None` when either input is not a positive number; callers report
/// [`DEGENERATE_PERCENTILE`] in that case.
pub fn explain_percentile(salary: f64, reference_mean: f64) -> Option<PercentileEstimate> {
    if !(salary > 0.0 && reference_mean > 0.0) {
        return None;
    }

    let distribution = LogNormal::from_mean(reference_mean);
    let z_score = distribution.z_score(salary);
    let probability = distribution.cdf(salary);
    let percentile = (probability * 100.0)
        .clamp(f64::from(MIN_PERCENTILE), f64::from(MAX_PERCENTILE))
        .round() as u8;

    Some(PercentileEstimate {
        mu: distribution.mu(),
        z_score,
        probability,
        percentile,
    })
}

/// Estimates the percentile rank of `salary` among wages with mean `reference_mean`.
///
/// The result is always within `1..=99`. Non-positive inputs yield 50.
///
/// # Examples
///
/// ```
/// use salary_rank::calculation::estimate_percentile;
///
/// assert_eq!(estimate_percentile(50_000.0, 20_702.0), 93);
/// assert_eq!(estimate_percentile(0.0, 20_702.0), 50);
/// ```
pub fn estimate_percentile(salary: f64, reference_mean: f64) -> u8 {
    explain_percentile(salary, reference_mean)
        .map_or(DEGENERATE_PERCENTILE, |estimate| estimate.percentile)
}

/// Ratio of salary to reference mean, rounded half away from zero to one decimal.
///
/// A zero mean yields zero.
///
/// # Examples
///
/// ```
/// use salary_rank::calculation::salary_multiplier;
///
/// assert_eq!(salary_multiplier(41_404, 20_702).to_string(), "2.0");
/// ```
pub fn salary_multiplier(salary: u64, reference_mean: u64) -> Decimal {
    let mut multiplier = Decimal::from(salary)
        .checked_div(Decimal::from(reference_mean))
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    multiplier.rescale(1);
    multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::SIGMA;

    /// PE-001: worked example against the national mean
    #[test]
    fn test_national_reference_example() {
        let estimate = explain_percentile(50_000.0, 20_702.0).unwrap();

        let expected_mu = 20_702f64.ln() - SIGMA * SIGMA / 2.0;
        let expected_z = (50_000f64.ln() - expected_mu) / SIGMA;
        assert!((estimate.mu - expected_mu).abs() < 1e-12);
        assert!((estimate.z_score - expected_z).abs() < 1e-12);
        assert!((estimate.z_score - 1.448_554_8).abs() < 1e-6);
        assert!((estimate.probability - 0.926_269).abs() < 1e-5);
        assert_eq!(estimate.percentile, 93);
    }

    /// PE-002: a salary equal to the mean sits above the median
    #[test]
    fn test_salary_equal_to_mean_is_67th_percentile() {
        // z = SIGMA / 2 = 0.435, Φ(0.435) ≈ 0.668
        for mean in [1.0, 100.0, 20_702.0, 1_000_000.0] {
            assert_eq!(estimate_percentile(mean, mean), 67, "mean = {}", mean);
        }
    }

    #[test]
    fn test_known_percentiles() {
        let cases = [
            (1_000.0, 20_702.0, 1),
            (5_000.0, 20_702.0, 12),
            (10_000.0, 20_702.0, 34),
            (15_000.0, 20_702.0, 53),
            (25_000.0, 20_702.0, 74),
            (41_404.0, 20_702.0, 89),
            (50_000.0, 23_840.0, 90),
            (50_000.0, 59_001.0, 60),
            (30_000.0, 25_472.0, 73),
        ];
        for (salary, mean, expected) in cases {
            assert_eq!(
                estimate_percentile(salary, mean),
                expected,
                "salary {} against mean {}",
                salary,
                mean
            );
        }
    }

    #[test]
    fn test_upper_tail_clamped_to_99() {
        assert_eq!(estimate_percentile(100_000.0, 20_702.0), 99);
        assert_eq!(estimate_percentile(10_000_000.0, 20_702.0), 99);
        assert_eq!(estimate_percentile(f64::INFINITY, 20_702.0), 99);
    }

    #[test]
    fn test_lower_tail_clamped_to_1() {
        assert_eq!(estimate_percentile(1.0, 20_702.0), 1);
        assert_eq!(estimate_percentile(1_000.0, f64::INFINITY), 1);
    }

    #[test]
    fn test_degenerate_inputs_return_midpoint() {
        assert_eq!(estimate_percentile(0.0, 20_702.0), 50);
        assert_eq!(estimate_percentile(50_000.0, 0.0), 50);
        assert_eq!(estimate_percentile(-10.0, 20_702.0), 50);
        assert_eq!(estimate_percentile(50_000.0, -1.0), 50);
        assert_eq!(estimate_percentile(f64::NAN, 20_702.0), 50);
        assert_eq!(estimate_percentile(50_000.0, f64::NAN), 50);
        assert!(explain_percentile(0.0, 0.0).is_none());
    }

    #[test]
    fn test_multiplier_exact_double() {
        assert_eq!(salary_multiplier(41_404, 20_702), Decimal::new(20, 1));
        assert_eq!(salary_multiplier(41_404, 20_702).to_string(), "2.0");
    }

    #[test]
    fn test_multiplier_rounds_to_one_decimal() {
        // 50000 / 20702 = 2.4152...
        assert_eq!(salary_multiplier(50_000, 20_702).to_string(), "2.4");
        // 10000 / 20702 = 0.4830...
        assert_eq!(salary_multiplier(10_000, 20_702).to_string(), "0.5");
    }

    #[test]
    fn test_multiplier_midpoint_rounds_up() {
        // 21 / 20 = 1.05
        assert_eq!(salary_multiplier(21, 20).to_string(), "1.1");
        // 5 / 4 = 1.25
        assert_eq!(salary_multiplier(5, 4).to_string(), "1.3");
    }

    #[test]
    fn test_multiplier_with_zero_mean_is_zero() {
        assert_eq!(salary_multiplier(50_000, 0), Decimal::ZERO);
    }
}

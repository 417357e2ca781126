//! Calculation logic for the salary rank engine.
//!
//! This module contains the log-normal distribution math, the single-mean
//! percentile estimator, and the multi-context comparison that produces a
//! [`SalaryResult`](crate::models::SalaryResult). Everything here is pure and
//! infallible.

mod comparison;
mod distribution;
mod percentile;

pub use comparison::{HEADLINE_CONTEXT, compare, compute_result, industry_reference_mean};
pub use distribution::{LogNormal, SIGMA, normal_cdf};
pub use percentile::{
    DEGENERATE_PERCENTILE, MAX_PERCENTILE, MIN_PERCENTILE, PercentileEstimate,
    estimate_percentile, explain_percentile, salary_multiplier,
};

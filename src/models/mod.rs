//! Core data models for the salary rank engine.
//!
//! This module contains the query and result value objects exchanged between
//! the estimator and its consumers.

mod query;
mod salary_result;

pub use query::SalaryQuery;
pub use salary_result::{Comparison, ComparisonContext, SalaryResult};

//! Salary query model.
//!
//! This module defines the [`SalaryQuery`] input value carried between the
//! form, result links and the estimator.

use serde::{Deserialize, Serialize};

/// A request to rank a monthly salary.
///
/// Region and industry keys are carried verbatim; resolution (with fallback)
/// happens inside the estimator so that hand-edited links never fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SalaryQuery {
    /// Monthly salary in whole currency units.
    pub salary: u64,
    /// Region name, matched exactly against the reference table.
    pub region: String,
    /// Industry key, matched exactly and case-sensitively.
    pub industry: String,
}

impl SalaryQuery {
    /// Creates a new query.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_rank::models::SalaryQuery;
    ///
    /// let query = SalaryQuery::new(50_000, "Karnataka", "IT");
    /// assert_eq!(query.salary, 50_000);
    /// assert_eq!(query.region, "Karnataka");
    /// ```
    pub fn new(salary: u64, region: impl Into<String>, industry: impl Into<String>) -> Self {
        Self {
            salary,
            region: region.into(),
            industry: industry.into(),
        }
    }
}

//! Input collection for a salary query.
//!
//! The estimator accepts any input; this module is where user input is
//! actually checked. A [`SalaryForm`] walks through three ordered steps
//! (salary, region, industry) and only produces a [`SalaryQuery`] once every
//! step holds a valid value.

use serde::{Deserialize, Serialize};

use crate::config::ReferenceTable;
use crate::error::{EngineError, EngineResult};
use crate::models::SalaryQuery;

/// Smallest monthly salary accepted from users.
pub const MIN_SALARY: u64 = 1_000;

/// Largest monthly salary accepted from users.
pub const MAX_SALARY: u64 = 10_000_000;

/// A step of the salary form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStep {
    /// Monthly salary entry.
    Salary,
    /// Region selection.
    Region,
    /// Industry selection.
    Industry,
}

impl FormStep {
    /// One-based position of the step.
    pub fn number(&self) -> u8 {
        match self {
            Self::Salary => 1,
            Self::Region => 2,
            Self::Industry => 3,
        }
    }

    /// Stable name of the step.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::Region => "region",
            Self::Industry => "industry",
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            Self::Salary => Some(Self::Region),
            Self::Region => Some(Self::Industry),
            Self::Industry => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            Self::Salary => None,
            Self::Region => Some(Self::Salary),
            Self::Industry => Some(Self::Region),
        }
    }
}

/// Parses a salary typed by a user, ignoring thousands separators.
///
/// # Errors
///
/// Returns `InvalidSalary` if the input is not a whole number.
///
/// # Examples
///
/// ```
/// use salary_rank::wizard::parse_salary;
///
/// assert_eq!(parse_salary("1,25,000").unwrap(), 125_000);
/// assert!(parse_salary("lots").is_err());
/// ```
pub fn parse_salary(input: &str) -> EngineResult<u64> {
    let digits: String = input
        .trim()
        .chars()
        .filter(|c| *c != ',')
        .collect();

    digits.parse::<u64>().map_err(|_| EngineError::InvalidSalary {
        input: input.to_string(),
    })
}

/// Checks that a salary lies within [`MIN_SALARY`]..=[`MAX_SALARY`].
///
/// # Errors
///
/// Returns `SalaryOutOfRange` for salaries outside the bounds.
pub fn validate_salary(salary: u64) -> EngineResult<u64> {
    if (MIN_SALARY..=MAX_SALARY).contains(&salary) {
        Ok(salary)
    } else {
        Err(EngineError::SalaryOutOfRange {
            salary,
            min: MIN_SALARY,
            max: MAX_SALARY,
        })
    }
}

/// A three-step salary form.
///
/// # Example
///
/// ```no_run
/// use salary_rank::config::ConfigLoader;
/// use salary_rank::wizard::SalaryForm;
///
/// let loader = ConfigLoader::load("./config/plfs_2023_24")?;
/// let table = loader.table();
///
/// let mut form = SalaryForm::new();
/// form.enter_salary("50,000")?;
/// form.next()?;
/// form.select_region("Karnataka", table)?;
/// form.next()?;
/// form.select_industry("IT", table)?;
/// let query = form.submit()?;
/// assert_eq!(query.salary, 50_000);
/// # Ok::<(), salary_rank::error::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryForm {
    step: FormStep,
    salary: Option<u64>,
    region: Option<String>,
    industry: Option<String>,
}

impl Default for SalaryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SalaryForm {
    /// Creates an empty form on the salary step.
    pub fn new() -> Self {
        Self {
            step: FormStep::Salary,
            salary: None,
            region: None,
            industry: None,
        }
    }

    /// The current step.
    pub fn step(&self) -> FormStep {
        self.step
    }

    /// The accepted salary, if any.
    pub fn salary(&self) -> Option<u64> {
        self.salary
    }

    /// The selected region, if any.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The selected industry key, if any.
    pub fn industry(&self) -> Option<&str> {
        self.industry.as_deref()
    }

    /// Parses and stores a salary. An invalid entry clears any stored salary.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSalary` or `SalaryOutOfRange`.
    pub fn enter_salary(&mut self, input: &str) -> EngineResult<u64> {
        let parsed = parse_salary(input).and_then(validate_salary);
        self.salary = parsed.as_ref().ok().copied();
        parsed
    }

    /// Selects a region by exact name.
    ///
    /// # Errors
    ///
    /// Returns `RegionNotFound` if the table has no such region.
    pub fn select_region(&mut self, name: &str, table: &ReferenceTable) -> EngineResult<()> {
        if table.region(name).is_none() {
            return Err(EngineError::RegionNotFound {
                region: name.to_string(),
            });
        }
        self.region = Some(name.to_string());
        Ok(())
    }

    /// Selects an industry by exact key.
    ///
    /// # Errors
    ///
    /// Returns `IndustryNotFound` if the table has no such industry.
    pub fn select_industry(&mut self, key: &str, table: &ReferenceTable) -> EngineResult<()> {
        if table.industry(key).is_none() {
            return Err(EngineError::IndustryNotFound {
                key: key.to_string(),
            });
        }
        self.industry = Some(key.to_string());
        Ok(())
    }

    fn is_complete(&self, step: FormStep) -> bool {
        match step {
            FormStep::Salary => self.salary.is_some(),
            FormStep::Region => self.region.is_some(),
            FormStep::Industry => self.industry.is_some(),
        }
    }

    fn require(&self, step: FormStep) -> EngineResult<()> {
        if self.is_complete(step) {
            Ok(())
        } else {
            Err(EngineError::IncompleteForm {
                step: step.name().to_string(),
            })
        }
    }

    /// Advances to the next step once the current one is complete.
    ///
    /// Stays on the last step.
    ///
    /// # Errors
    ///
    /// Returns `IncompleteForm` naming the current step if it has no valid value.
    pub fn next(&mut self) -> EngineResult<FormStep> {
        self.require(self.step)?;
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Returns to the previous step, keeping entered values. Stays on the first step.
    pub fn back(&mut self) -> FormStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Produces the query from the final step.
    ///
    /// # Errors
    ///
    /// Returns `IncompleteForm` if the form is not on the last step, or if
    /// any step is missing its value.
    pub fn submit(&self) -> EngineResult<SalaryQuery> {
        if self.step != FormStep::Industry {
            return Err(EngineError::IncompleteForm {
                step: self.step.name().to_string(),
            });
        }

        match (self.salary, &self.region, &self.industry) {
            (Some(salary), Some(region), Some(industry)) => {
                Ok(SalaryQuery::new(salary, region.clone(), industry.clone()))
            }
            _ => {
                let missing = [FormStep::Salary, FormStep::Region, FormStep::Industry]
                    .into_iter()
                    .find(|step| !self.is_complete(*step))
                    .unwrap_or(FormStep::Industry);
                Err(EngineError::IncompleteForm {
                    step: missing.name().to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::table;

    #[test]
    fn test_parse_salary_strips_separators() {
        assert_eq!(parse_salary("50000").unwrap(), 50_000);
        assert_eq!(parse_salary("50,000").unwrap(), 50_000);
        assert_eq!(parse_salary(" 1,00,00,000 ").unwrap(), 10_000_000);
    }

    #[test]
    fn test_parse_salary_rejects_non_numeric() {
        for input in ["", "abc", "12.5", "-1000", "1 000"] {
            match parse_salary(input) {
                Err(EngineError::InvalidSalary { input: rejected }) => {
                    assert_eq!(rejected, input)
                }
                other => panic!("Expected InvalidSalary for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_validate_salary_bounds() {
        assert!(validate_salary(999).is_err());
        assert_eq!(validate_salary(1_000).unwrap(), 1_000);
        assert_eq!(validate_salary(10_000_000).unwrap(), 10_000_000);
        assert!(matches!(
            validate_salary(10_000_001),
            Err(EngineError::SalaryOutOfRange { salary: 10_000_001, .. })
        ));
    }

    #[test]
    fn test_full_walkthrough_submits_query() {
        let table = table();
        let mut form = SalaryForm::new();
        assert_eq!(form.step().number(), 1);

        form.enter_salary("41,404").unwrap();
        assert_eq!(form.next().unwrap(), FormStep::Region);
        form.select_region("Punjab", &table).unwrap();
        assert_eq!(form.next().unwrap(), FormStep::Industry);
        form.select_industry("AGRICULTURE", &table).unwrap();

        let query = form.submit().unwrap();
        assert_eq!(query, SalaryQuery::new(41_404, "Punjab", "AGRICULTURE"));
    }

    #[test]
    fn test_next_refused_until_step_valid() {
        let table = table();
        let mut form = SalaryForm::new();

        assert!(matches!(
            form.next(),
            Err(EngineError::IncompleteForm { ref step }) if step == "salary"
        ));

        assert!(form.enter_salary("500").is_err());
        assert!(form.next().is_err());
        assert_eq!(form.step(), FormStep::Salary);

        form.enter_salary("5000").unwrap();
        form.next().unwrap();
        assert!(form.select_region("Atlantis", &table).is_err());
        assert!(form.next().is_err());
        assert_eq!(form.step(), FormStep::Region);
    }

    #[test]
    fn test_invalid_salary_clears_previous_value() {
        let mut form = SalaryForm::new();
        form.enter_salary("5000").unwrap();
        assert!(form.enter_salary("50").is_err());
        assert_eq!(form.salary(), None);
    }

    #[test]
    fn test_back_keeps_values_and_stops_at_first_step() {
        let table = table();
        let mut form = SalaryForm::new();
        form.enter_salary("25000").unwrap();
        form.next().unwrap();
        form.select_region("Maharashtra", &table).unwrap();

        assert_eq!(form.back(), FormStep::Salary);
        assert_eq!(form.back(), FormStep::Salary);
        assert_eq!(form.salary(), Some(25_000));
        assert_eq!(form.region(), Some("Maharashtra"));
    }

    #[test]
    fn test_next_on_last_step_stays() {
        let table = table();
        let mut form = SalaryForm::new();
        form.enter_salary("25000").unwrap();
        form.next().unwrap();
        form.select_region("Maharashtra", &table).unwrap();
        form.next().unwrap();
        form.select_industry("IT", &table).unwrap();
        assert_eq!(form.next().unwrap(), FormStep::Industry);
    }

    #[test]
    fn test_submit_before_last_step_is_refused() {
        let mut form = SalaryForm::new();
        form.enter_salary("25000").unwrap();
        assert!(matches!(
            form.submit(),
            Err(EngineError::IncompleteForm { ref step }) if step == "salary"
        ));
    }

    #[test]
    fn test_submit_without_industry_names_missing_step() {
        let table = table();
        let mut form = SalaryForm::new();
        form.enter_salary("25000").unwrap();
        form.next().unwrap();
        form.select_region("Punjab", &table).unwrap();
        form.next().unwrap();

        assert!(matches!(
            form.submit(),
            Err(EngineError::IncompleteForm { ref step }) if step == "industry"
        ));
    }

    #[test]
    fn test_unknown_industry_is_rejected() {
        let table = table();
        let mut form = SalaryForm::new();
        assert!(matches!(
            form.select_industry("it", &table),
            Err(EngineError::IndustryNotFound { .. })
        ));
    }
}

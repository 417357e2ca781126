//! Error types for the salary rank engine.
//!
//! The percentile estimator itself is total and never fails. Errors only arise
//! while loading reference data and at the input-collection boundary, where
//! salaries and region names arriving from users are checked before a result
//! is rendered.

use thiserror::Error;

/// The main error type for the salary rank engine.
///
/// # Example
///
/// ```
/// use salary_rank::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/regions.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/regions.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Reference data parsed but violates a table invariant.
    #[error("Invalid reference table: {message}")]
    InvalidReferenceTable {
        /// A description of the violated invariant.
        message: String,
    },

    /// A salary could not be read as a whole number of currency units.
    #[error("Invalid salary '{input}'")]
    InvalidSalary {
        /// The raw input that failed to parse.
        input: String,
    },

    /// A salary lies outside the accepted bounds.
    #[error("Salary {salary} is outside the accepted range {min}..={max}")]
    SalaryOutOfRange {
        /// The rejected salary.
        salary: u64,
        /// The smallest accepted salary.
        min: u64,
        /// The largest accepted salary.
        max: u64,
    },

    /// Region name was not found in the reference table.
    #[error("Region not found: {region}")]
    RegionNotFound {
        /// The region name that was not found.
        region: String,
    },

    /// Industry key was not found in the reference table.
    #[error("Industry not found: {key}")]
    IndustryNotFound {
        /// The industry key that was not found.
        key: String,
    },

    /// A form was submitted or advanced before a step was completed.
    #[error("Form step '{step}' is incomplete")]
    IncompleteForm {
        /// The step that is missing input.
        step: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

//! Response types for the salary rank API.
//!
//! This module defines the success bodies, the error response structure and
//! the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::config::{Industry, RegionMean};
use crate::error::EngineError;
use crate::models::{SalaryQuery, SalaryResult};
use crate::presentation::{DistributionPlot, ShareMetadata, TierView};

/// Body of a successful `/result` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultResponse {
    /// The query the result was computed for.
    pub query: SalaryQuery,
    /// The computed result.
    pub result: SalaryResult,
    /// Tier and color of the headline percentile.
    pub tier: TierView,
    /// Title, description and share links.
    pub share: ShareMetadata,
    /// Density curve with a marker at the headline percentile.
    pub plot: DistributionPlot,
}

/// A region and its reference means.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionEntry {
    /// Region name, as accepted by the `state` parameter.
    pub name: String,
    /// Reference means.
    #[serde(flatten)]
    pub means: RegionMean,
}

/// Body of the `/regions` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionsResponse {
    /// Nation label.
    pub nation: String,
    /// National reference means.
    pub national: RegionMean,
    /// Regions ordered by name.
    pub regions: Vec<RegionEntry>,
}

/// Body of the `/industries` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustriesResponse {
    /// Key used when an industry key does not resolve.
    pub default_industry: String,
    /// Industries in display order.
    pub industries: Vec<Industry>,
}

/// Body of the `/health` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok".
    pub status: String,
    /// Name of the loaded dataset.
    pub dataset: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates an invalid query string error response.
    pub fn malformed_query(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_QUERY", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidReferenceTable { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::InvalidSalary { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SALARY",
                    message,
                    "The salary must be a whole number of currency units",
                ),
            },
            EngineError::SalaryOutOfRange { min, max, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "SALARY_OUT_OF_RANGE",
                    message,
                    format!("Enter a monthly salary between {} and {}", min, max),
                ),
            },
            EngineError::RegionNotFound { region } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "REGION_NOT_FOUND",
                    message,
                    format!("'{}' is not a region in the reference data", region),
                ),
            },
            EngineError::IndustryNotFound { key } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "INDUSTRY_NOT_FOUND",
                    message,
                    format!("'{}' is not an industry key in the reference data", key),
                ),
            },
            EngineError::IncompleteForm { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INCOMPLETE_FORM", message),
            },
        }
    }
}

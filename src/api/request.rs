//! Request types for the salary rank API.
//!
//! Result links are hand-editable, so every parameter is optional and read
//! leniently here. Strictness, where wanted, is applied by the handlers.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::config::ReferenceTable;
use crate::models::SalaryQuery;

/// Query parameters shared by `/result` and `/card`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryParams {
    /// Monthly salary; only its leading digits are read.
    #[serde(default)]
    pub salary: Option<String>,
    /// Region name.
    #[serde(default)]
    pub state: Option<String>,
    /// Industry key.
    #[serde(default)]
    pub industry: Option<String>,
    /// Percentile carried in card links.
    #[serde(default)]
    pub percentile: Option<String>,
}

impl QueryParams {
    /// The salary parameter, or 0 when missing or not numeric.
    pub fn salary(&self) -> u64 {
        self.salary.as_deref().map_or(0, parse_leading_integer)
    }

    /// The region parameter, or an empty string.
    pub fn state(&self) -> &str {
        self.state.as_deref().unwrap_or("")
    }

    /// The percentile parameter, or 0, capped at 100.
    pub fn percentile(&self) -> u8 {
        let value = self.percentile.as_deref().map_or(0, parse_leading_integer);
        value.min(100) as u8
    }

    /// Reads parameters from a raw query string the way a browser would.
    ///
    /// Never fails: the first occurrence of a repeated key wins, unknown keys
    /// are ignored, and undecodable bytes are replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_rank::api::QueryParams;
    ///
    /// let params = QueryParams::from_raw_query(Some("state=Goa&state=Bihar&salary=5e4"));
    /// assert_eq!(params.state(), "Goa");
    /// assert_eq!(params.salary(), 5);
    /// ```
    pub fn from_raw_query(raw: Option<&str>) -> Self {
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(raw.unwrap_or("").as_bytes()) {
            let slot = match key.as_ref() {
                "salary" => &mut params.salary,
                "state" => &mut params.state,
                "industry" => &mut params.industry,
                "percentile" => &mut params.percentile,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }

    /// Converts the parameters into a query.
    ///
    /// A missing industry becomes the table's default industry key.
    pub fn to_query(&self, table: &ReferenceTable) -> SalaryQuery {
        let industry = self
            .industry
            .clone()
            .unwrap_or_else(|| table.default_industry().key.clone());
        SalaryQuery::new(self.salary(), self.state(), industry)
    }
}

/// Reads the leading run of ASCII digits after optional whitespace.
///
/// Returns 0 when there are none, and saturates on overflow.
///
/// # Examples
///
/// ```
/// use salary_rank::api::parse_leading_integer;
///
/// assert_eq!(parse_leading_integer("50000"), 50_000);
/// assert_eq!(parse_leading_integer(" 42abc"), 42);
/// assert_eq!(parse_leading_integer("abc"), 0);
/// ```
pub fn parse_leading_integer(input: &str) -> u64 {
    input
        .trim_start()
        .chars()
        .map_while(|c| c.to_digit(10))
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u64::from(digit))
        })
}

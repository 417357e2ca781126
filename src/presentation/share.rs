//! Share links and social metadata for a result.
//!
//! Links carry only the query parameters (`salary`, `state`, `industry`), so
//! every consumer recomputes the same result from the same inputs.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::config::ReferenceTable;
use crate::models::{SalaryQuery, SalaryResult};

use super::format::{format_compact_currency, ordinal};

/// Path of the result page.
pub const RESULT_PATH: &str = "/result";

/// Path of the social card endpoint.
pub const CARD_PATH: &str = "/card";

/// Title, description and share texts for a rendered result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareMetadata {
    /// Page and social preview title.
    pub title: String,
    /// Page and social preview description.
    pub description: String,
    /// Absolute link to the result page.
    pub result_url: String,
    /// Absolute link to the social card for this result.
    pub card_url: String,
    /// Text for a short-form social post.
    pub post_text: String,
    /// Text for a chat message, ending with the result link.
    pub chat_text: String,
}

/// Title used when a query cannot be rendered as a result.
pub fn default_title(table: &ReferenceTable) -> String {
    format!("{} Salary Rank", table.dataset().nation)
}

/// Encodes the query parameters shared by the result page and social card.
///
/// # Examples
///
/// ```
/// use salary_rank::models::SalaryQuery;
/// use salary_rank::presentation::query_string;
///
/// let query = SalaryQuery::new(50_000, "Jammu & Kashmir", "IT");
/// assert_eq!(
///     query_string(&query),
///     "salary=50000&state=Jammu+%26+Kashmir&industry=IT"
/// );
/// ```
pub fn query_string(query: &SalaryQuery) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("salary", &query.salary.to_string())
        .append_pair("state", &query.region)
        .append_pair("industry", &query.industry)
        .finish()
}

/// Relative link to the result page for a query.
pub fn result_path(query: &SalaryQuery) -> String {
    format!("{}?{}", RESULT_PATH, query_string(query))
}

/// Relative link to the social card for a query and its headline percentile.
pub fn card_path(query: &SalaryQuery, percentile: u8) -> String {
    format!(
        "{}?{}&percentile={}",
        CARD_PATH,
        query_string(query),
        percentile
    )
}

/// Builds share metadata for a computed result.
///
/// `base_url` is the public origin links are made absolute against.
pub fn share_metadata(
    query: &SalaryQuery,
    result: &SalaryResult,
    table: &ReferenceTable,
    base_url: &str,
) -> ShareMetadata {
    let dataset = table.dataset();
    let industry = table.resolve_industry(&query.industry);
    let rank = ordinal(u32::from(result.headline_percentile));
    let region = &result.region_name;
    let base_url = base_url.trim_end_matches('/');
    let result_url = format!("{}{}", base_url, result_path(query));

    ShareMetadata {
        title: format!("I'm in the {} percentile of earners in {}!", rank, region),
        description: format!(
            "{}/month puts me in the {} percentile among salaried employees in {} ({}). \
             Based on official {} data. Find out where YOU stand!",
            format_compact_currency(query.salary, &dataset.currency_symbol),
            rank,
            region,
            industry.label,
            dataset.name
        ),
        card_url: format!(
            "{}{}",
            base_url,
            card_path(query, result.headline_percentile)
        ),
        post_text: format!(
            "I'm in the {} percentile of salaried employees in {}!\n\n\
             Based on official Govt of {} data ({}).\n\n\
             Find out where YOU stand on {}'s salary ladder 👇",
            rank, region, dataset.nation, dataset.name, dataset.nation
        ),
        chat_text: format!(
            "🤑 I just found out I'm in the {} percentile of salaried workers in {} ({} sector)!\n\n\
             Based on real govt data. Check yours here 👇\n{}",
            rank, region, industry.label, result_url
        ),
        result_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute_result;
    use crate::config::test_support::table;

    #[test]
    fn test_query_string_encodes_spaces_and_ampersands() {
        let query = SalaryQuery::new(41_404, "Tamil Nadu", "REAL_ESTATE");
        assert_eq!(
            query_string(&query),
            "salary=41404&state=Tamil+Nadu&industry=REAL_ESTATE"
        );
    }

    #[test]
    fn test_paths() {
        let query = SalaryQuery::new(50_000, "Punjab", "IT");
        assert_eq!(result_path(&query), "/result?salary=50000&state=Punjab&industry=IT");
        assert_eq!(
            card_path(&query, 97),
            "/card?salary=50000&state=Punjab&industry=IT&percentile=97"
        );
    }

    #[test]
    fn test_default_title_names_nation() {
        assert_eq!(default_title(&table()), "India Salary Rank");
    }

    #[test]
    fn test_share_metadata_text() {
        let table = table();
        let query = SalaryQuery::new(50_000, "Maharashtra", "IT");
        let result = compute_result(&query, &table);
        let meta = share_metadata(&query, &result, &table, "https://rank.example/");

        assert_eq!(
            meta.title,
            "I'm in the 90th percentile of earners in Maharashtra!"
        );
        assert!(meta.description.starts_with(
            "₹50.0K/month puts me in the 90th percentile among salaried employees in Maharashtra (IT)."
        ));
        assert!(meta.description.contains("Based on official PLFS 2023-24 data."));
        assert_eq!(
            meta.result_url,
            "https://rank.example/result?salary=50000&state=Maharashtra&industry=IT"
        );
        assert_eq!(
            meta.card_url,
            "https://rank.example/card?salary=50000&state=Maharashtra&industry=IT&percentile=90"
        );
        assert!(meta.post_text.contains("Govt of India data (PLFS 2023-24)"));
        assert!(meta.chat_text.ends_with(&meta.result_url));
        assert!(meta.chat_text.contains("(IT sector)"));
    }
}

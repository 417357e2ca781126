//! Social card model.
//!
//! The card is rendered from query parameters alone. It recomputes the
//! headline from the salary and region when both are usable, and otherwise
//! shows the percentile carried in the link.

use serde::{Deserialize, Serialize};

use crate::calculation::compute_result;
use crate::config::ReferenceTable;
use crate::models::SalaryQuery;

use super::format::{format_compact_currency, ordinal};
use super::tier::percentile_color;

/// Relative heights of the card's background histogram.
pub const CARD_BARS: [u8; 10] = [10, 25, 45, 35, 20, 15, 10, 8, 6, 5];

/// Placeholder for figures the card cannot show.
const MISSING: &str = "—";

/// Everything a social card renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialCard {
    /// Headline percentile.
    pub percentile: u8,
    /// Headline percentile as an ordinal ("90th").
    pub percentile_ordinal: String,
    /// Accent color (hex).
    pub color: String,
    /// Region named on the card, as given in the link.
    pub region_name: String,
    /// Whether the region resolved in the reference table.
    pub region_known: bool,
    /// Region mean shown on the card (national mean when the region is unknown).
    pub region_mean: u64,
    /// Formatted region mean, or a dash when the region is unknown.
    pub region_mean_display: String,
    /// Formatted salary, or a dash when no salary was given.
    pub salary_display: String,
    /// Salary to region mean multiplier ("1.0" when not recomputed).
    pub multiplier: String,
    /// Industry label.
    pub industry_label: String,
    /// Industry emoji.
    pub industry_emoji: String,
    /// Histogram bar heights.
    pub bars: Vec<u8>,
    /// Index of the bar holding the headline percentile.
    pub highlighted_bar: usize,
    /// Headline sentence.
    pub headline: String,
}

impl SocialCard {
    /// Builds a card from link parameters.
    ///
    /// `percentile_hint` is used only when the result cannot be recomputed,
    /// i.e. when `salary` is zero or the region is unknown.
    pub fn build(query: &SalaryQuery, percentile_hint: u8, table: &ReferenceTable) -> Self {
        let symbol = &table.dataset().currency_symbol;
        let region = table.resolve_region(&query.region);
        let industry = table.resolve_industry(&query.industry);

        let (percentile, region_mean, multiplier) = if region.matched && query.salary > 0 {
            let result = compute_result(query, table);
            (
                result.headline_percentile,
                result.region.reference_mean,
                result.region.multiplier.to_string(),
            )
        } else {
            (percentile_hint, region.mean, "1.0".to_string())
        };

        Self {
            percentile,
            percentile_ordinal: ordinal(u32::from(percentile)),
            color: percentile_color(percentile).to_string(),
            region_name: query.region.clone(),
            region_known: region.matched,
            region_mean,
            region_mean_display: if region.matched {
                format_compact_currency(region_mean, symbol)
            } else {
                MISSING.to_string()
            },
            salary_display: if query.salary > 0 {
                format_compact_currency(query.salary, symbol)
            } else {
                MISSING.to_string()
            },
            multiplier,
            industry_label: industry.label.clone(),
            industry_emoji: industry.emoji.clone(),
            bars: CARD_BARS.to_vec(),
            highlighted_bar: usize::from(percentile / 10).min(CARD_BARS.len() - 1),
            headline: format!(
                "Better than {}% of earners in {}",
                percentile, query.region
            ),
        }
    }
}

//! Formatting of computed results for renderers.
//!
//! Nothing in this module computes percentiles. It turns a
//! [`SalaryResult`](crate::models::SalaryResult) into tiers, colors, text,
//! share links, social card data and plot samples.

mod card;
mod format;
mod plot;
mod share;
mod tier;

pub use card::{CARD_BARS, SocialCard};
pub use format::{format_compact_currency, ordinal};
pub use plot::{DistributionPlot, PLOT_MAX, PLOT_MIN, PLOT_POINTS};
pub use share::{
    CARD_PATH, RESULT_PATH, ShareMetadata, card_path, default_title, query_string, result_path,
    share_metadata,
};
pub use tier::{PercentileTier, TierView, percentile_color};

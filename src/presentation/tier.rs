//! Percentile tiers and colors.

use serde::{Deserialize, Serialize};

/// A named band of percentiles shown next to the headline figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentileTier {
    /// 95th percentile and above.
    Elite,
    /// 90th to 94th percentile.
    TopTier,
    /// 75th to 89th percentile.
    HighEarner,
    /// 60th to 74th percentile.
    AboveAverage,
    /// 40th to 59th percentile.
    AroundAverage,
    /// 25th to 39th percentile.
    BelowAverage,
    /// Below the 25th percentile.
    EntryLevel,
}

impl PercentileTier {
    /// Returns the tier a percentile falls in.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_rank::presentation::PercentileTier;
    ///
    /// assert_eq!(PercentileTier::from_percentile(93), PercentileTier::TopTier);
    /// assert_eq!(PercentileTier::from_percentile(50).label(), "Around Average");
    /// ```
    pub fn from_percentile(percentile: u8) -> Self {
        match percentile {
            95.. => Self::Elite,
            90..=94 => Self::TopTier,
            75..=89 => Self::HighEarner,
            60..=74 => Self::AboveAverage,
            40..=59 => Self::AroundAverage,
            25..=39 => Self::BelowAverage,
            _ => Self::EntryLevel,
        }
    }

    /// Human-readable tier name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Elite => "Elite Earner",
            Self::TopTier => "Top Tier",
            Self::HighEarner => "High Earner",
            Self::AboveAverage => "Above Average",
            Self::AroundAverage => "Around Average",
            Self::BelowAverage => "Below Average",
            Self::EntryLevel => "Entry Level",
        }
    }

    /// Emoji shown after the tier name.
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Elite => "🏆",
            Self::TopTier => "🥇",
            Self::HighEarner => "⭐",
            Self::AboveAverage => "📈",
            Self::AroundAverage => "🎯",
            Self::BelowAverage => "📉",
            Self::EntryLevel => "💪",
        }
    }
}

/// Accent color (hex) for a percentile.
///
/// # Examples
///
/// ```
/// use salary_rank::presentation::percentile_color;
///
/// assert_eq!(percentile_color(93), "#F59E0B");
/// assert_eq!(percentile_color(10), "#EF4444");
/// ```
pub fn percentile_color(percentile: u8) -> &'static str {
    match percentile {
        90.. => "#F59E0B",
        75..=89 => "#22C55E",
        50..=74 => "#3B82F6",
        25..=49 => "#F97316",
        _ => "#EF4444",
    }
}

/// Tier, label and color for a percentile, as sent to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierView {
    /// The tier.
    pub tier: PercentileTier,
    /// Tier name followed by its emoji.
    pub label: String,
    /// Accent color (hex).
    pub color: String,
}

impl TierView {
    /// Builds the view for a percentile.
    pub fn for_percentile(percentile: u8) -> Self {
        let tier = PercentileTier::from_percentile(percentile);
        Self {
            tier,
            label: format!("{} {}", tier.label(), tier.emoji()),
            color: percentile_color(percentile).to_string(),
        }
    }
}

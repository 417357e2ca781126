//! Number formatting for result text.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount compactly with lakh (L) and thousand (K) suffixes.
///
/// Amounts of one lakh and above are shown in lakhs, amounts of one thousand
/// and above in thousands, both with one decimal.
///
/// # Examples
///
/// ```
/// use salary_rank::presentation::format_compact_currency;
///
/// assert_eq!(format_compact_currency(50_000, "₹"), "₹50.0K");
/// assert_eq!(format_compact_currency(250_000, "₹"), "₹2.5L");
/// assert_eq!(format_compact_currency(999, "₹"), "₹999");
/// ```
pub fn format_compact_currency(amount: u64, symbol: &str) -> String {
    if amount >= 100_000 {
        format!("{}{}L", symbol, one_decimal(amount, 100_000))
    } else if amount >= 1_000 {
        format!("{}{}K", symbol, one_decimal(amount, 1_000))
    } else {
        format!("{}{}", symbol, amount)
    }
}

fn one_decimal(amount: u64, unit: u64) -> String {
    let mut value = (Decimal::from(amount) / Decimal::from(unit))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(1);
    value.to_string()
}

/// English ordinal for a number (1st, 2nd, 3rd, 4th, 11th, 21st, ...).
///
/// # Examples
///
/// ```
/// use salary_rank::presentation::ordinal;
///
/// assert_eq!(ordinal(93), "93rd");
/// assert_eq!(ordinal(12), "12th");
/// ```
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 100, n % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

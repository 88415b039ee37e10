//! Formatting utilities for metrics display.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Placeholder shown for undefined metrics.
pub const NOT_AVAILABLE: &str = "N/A";

/// Date layout used across the panel and charts.
pub const DATE_FORMAT: &str = "%d %b %Y";

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a percentage already scaled to 0-100.
#[must_use]
pub fn format_pct(value: Decimal) -> String {
    format!("{:.2}%", round2(value))
}

/// Format a decimal with 2 decimal places.
#[must_use]
pub fn format_decimal(value: Decimal) -> String {
    format!("{:.2}", round2(value))
}

/// Format an optional decimal ratio.
#[must_use]
pub fn format_ratio(value: Option<Decimal>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), format_decimal)
}

/// Format a monetary amount with a currency prefix and thousands separators.
///
/// `format_amount(dec!(-1234.5), "Rs ")` gives `-Rs 1,234.50`.
#[must_use]
pub fn format_amount(value: Decimal, symbol: &str) -> String {
    let rounded = round2(value);
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{symbol}{grouped}.{frac_part}")
}

/// Format an optional amount.
#[must_use]
pub fn format_optional_amount(value: Option<Decimal>, symbol: &str) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format_amount(v, symbol))
}

/// Format a day count.
#[must_use]
pub fn format_days(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

/// Format an optional day count.
#[must_use]
pub fn format_optional_days(days: Option<i64>) -> String {
    days.map_or_else(|| NOT_AVAILABLE.to_string(), format_days)
}

/// Format a date as `01 Aug 2024`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

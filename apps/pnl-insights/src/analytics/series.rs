//! Series Builder: per-day and cumulative value series.

use rust_decimal::Decimal;

use super::types::{DailyRecord, DerivedSeries};
use crate::error::AnalyticsError;

/// Derive the per-day totals and running sums for `records`.
///
/// Cumulative sums start from zero; only `cumulative_on_capital` is offset by
/// `initial_capital`. The output is index-aligned with `records`.
pub fn build_series(
    records: &[DailyRecord],
    initial_capital: Decimal,
) -> Result<DerivedSeries, AnalyticsError> {
    if records.is_empty() {
        return Err(AnalyticsError::empty_series());
    }

    let len = records.len();
    let mut series = DerivedSeries {
        dates: Vec::with_capacity(len),
        put_pnl: Vec::with_capacity(len),
        call_pnl: Vec::with_capacity(len),
        total_pnl: Vec::with_capacity(len),
        cumulative_total: Vec::with_capacity(len),
        cumulative_put: Vec::with_capacity(len),
        cumulative_call: Vec::with_capacity(len),
        cumulative_on_capital: Vec::with_capacity(len),
        initial_capital,
    };

    let mut running_total = Decimal::ZERO;
    let mut running_put = Decimal::ZERO;
    let mut running_call = Decimal::ZERO;

    for (row, record) in records.iter().enumerate() {
        let overflow = || {
            AnalyticsError::invalid_input(format!(
                "row {row}: amounts exceed the representable decimal range"
            ))
        };
        let total = record
            .put_pnl
            .checked_add(record.call_pnl)
            .ok_or_else(overflow)?;
        running_total = running_total.checked_add(total).ok_or_else(overflow)?;
        running_put = running_put
            .checked_add(record.put_pnl)
            .ok_or_else(overflow)?;
        running_call = running_call
            .checked_add(record.call_pnl)
            .ok_or_else(overflow)?;
        let on_capital = initial_capital
            .checked_add(running_total)
            .ok_or_else(overflow)?;

        series.dates.push(record.date);
        series.put_pnl.push(record.put_pnl);
        series.call_pnl.push(record.call_pnl);
        series.total_pnl.push(total);
        series.cumulative_total.push(running_total);
        series.cumulative_put.push(running_put);
        series.cumulative_call.push(running_call);
        series.cumulative_on_capital.push(on_capital);
    }

    Ok(series)
}

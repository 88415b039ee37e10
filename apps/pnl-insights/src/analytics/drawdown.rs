//! Drawdown Tracker: running peak, drawdown and recovery of a cumulative curve.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::math::first_argmin;
use super::types::DrawdownSeries;
use crate::error::AnalyticsError;

/// Track the drawdown profile of `cumulative_total`, aligned with `dates`.
///
/// The running peak starts at the first observation (not at zero), so the
/// first day always has a drawdown of zero.
pub fn track_drawdown(
    dates: &[NaiveDate],
    cumulative_total: &[Decimal],
) -> Result<DrawdownSeries, AnalyticsError> {
    if cumulative_total.is_empty() {
        return Err(AnalyticsError::empty_series());
    }
    if dates.len() != cumulative_total.len() {
        return Err(AnalyticsError::invalid_input(format!(
            "dates ({}) and cumulative totals ({}) are not aligned",
            dates.len(),
            cumulative_total.len()
        )));
    }

    let mut running_max = Vec::with_capacity(cumulative_total.len());
    let mut drawdown = Vec::with_capacity(cumulative_total.len());
    let mut peak = cumulative_total[0];

    for (row, value) in cumulative_total.iter().enumerate() {
        peak = peak.max(*value);
        let Some(gap) = value.checked_sub(peak) else {
            return Err(AnalyticsError::invalid_input(format!(
                "row {row}: drawdown exceeds the representable decimal range"
            )));
        };
        running_max.push(peak);
        drawdown.push(gap);
    }

    let Some(max_drawdown_index) = first_argmin(&drawdown) else {
        return Err(AnalyticsError::empty_series());
    };
    let max_drawdown = drawdown[max_drawdown_index];
    let max_drawdown_date = dates[max_drawdown_index];

    let recovery_days = recovery_days(
        dates,
        cumulative_total,
        max_drawdown_index,
        running_max[max_drawdown_index],
    );

    Ok(DrawdownSeries {
        running_max,
        drawdown,
        max_drawdown,
        max_drawdown_index,
        max_drawdown_date,
        recovery_days,
    })
}

/// Calendar days from `from_index` until the curve first reaches `peak` again.
///
/// The search starts at `from_index` itself, so a zero drawdown recovers in
/// zero days. `None` when the peak is never regained within the series.
fn recovery_days(
    dates: &[NaiveDate],
    cumulative_total: &[Decimal],
    from_index: usize,
    peak: Decimal,
) -> Option<i64> {
    let start = dates[from_index];
    cumulative_total
        .iter()
        .zip(dates)
        .skip(from_index)
        .find(|(value, _)| **value >= peak)
        .map(|(_, date)| (*date - start).num_days())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn dates(n: u32) -> Vec<NaiveDate> {
        (1..=n)
            .map(|d| {
                let Some(date) = NaiveDate::from_ymd_opt(2024, 1, d) else {
                    panic!("valid test date");
                };
                date
            })
            .collect()
    }

    #[test]
    fn test_running_max_and_drawdown() {
        let curve = vec![dec!(100), dec!(150), dec!(120), dec!(160), dec!(90), dec!(170)];
        let Ok(dd) = track_drawdown(&dates(6), &curve) else {
            panic!("drawdown should compute");
        };

        assert_eq!(
            dd.running_max,
            vec![dec!(100), dec!(150), dec!(150), dec!(160), dec!(160), dec!(170)]
        );
        assert_eq!(
            dd.drawdown,
            vec![dec!(0), dec!(0), dec!(-30), dec!(0), dec!(-70), dec!(0)]
        );
        assert_eq!(dd.max_drawdown, dec!(-70));
        assert_eq!(dd.max_drawdown_index, 4);
        assert_eq!(dd.max_drawdown_date, dates(6)[4]);
        // Peak of 160 regained on day 6 (index 5): one calendar day later.
        assert_eq!(dd.recovery_days, Some(1));
    }

    #[test]
    fn test_first_value_sets_initial_peak() {
        let curve = vec![dec!(-50), dec!(-80), dec!(-20)];
        let Ok(dd) = track_drawdown(&dates(3), &curve) else {
            panic!("drawdown should compute");
        };
        assert_eq!(dd.running_max[0], dec!(-50));
        assert_eq!(dd.drawdown, vec![dec!(0), dec!(-30), dec!(0)]);
        assert_eq!(dd.recovery_days, Some(1));
    }

    #[test]
    fn test_max_drawdown_tie_takes_earliest_date() {
        let curve = vec![dec!(100), dec!(60), dec!(100), dec!(60)];
        let Ok(dd) = track_drawdown(&dates(4), &curve) else {
            panic!("drawdown should compute");
        };
        assert_eq!(dd.max_drawdown, dec!(-40));
        assert_eq!(dd.max_drawdown_index, 1);
        assert_eq!(dd.recovery_days, Some(1));
    }

    #[test]
    fn test_monotonic_curve_has_zero_drawdown_and_zero_recovery() {
        let curve = vec![dec!(10), dec!(20), dec!(20), dec!(35)];
        let Ok(dd) = track_drawdown(&dates(4), &curve) else {
            panic!("drawdown should compute");
        };
        assert_eq!(dd.max_drawdown, Decimal::ZERO);
        assert_eq!(dd.max_drawdown_index, 0);
        assert_eq!(dd.recovery_days, Some(0));
        assert!(dd.drawdown.iter().all(|d| *d == Decimal::ZERO));
    }

    #[test]
    fn test_unrecovered_drawdown_is_none() {
        let curve = vec![dec!(100), dec!(200), dec!(120), dec!(150)];
        let Ok(dd) = track_drawdown(&dates(4), &curve) else {
            panic!("drawdown should compute");
        };
        assert_eq!(dd.max_drawdown, dec!(-80));
        assert_eq!(dd.recovery_days, None);
    }

    #[test]
    fn test_recovery_counts_calendar_days_not_observations() {
        let Some(fri) = NaiveDate::from_ymd_opt(2024, 8, 2) else {
            panic!("valid date");
        };
        let Some(mon) = NaiveDate::from_ymd_opt(2024, 8, 5) else {
            panic!("valid date");
        };
        let Some(thu) = NaiveDate::from_ymd_opt(2024, 8, 1) else {
            panic!("valid date");
        };
        let curve = vec![dec!(500), dec!(300), dec!(500)];
        let Ok(dd) = track_drawdown(&[thu, fri, mon], &curve) else {
            panic!("drawdown should compute");
        };
        assert_eq!(dd.max_drawdown_date, fri);
        assert_eq!(dd.recovery_days, Some(3));
    }

    #[test]
    fn test_rejects_empty_and_misaligned_input() {
        assert!(track_drawdown(&[], &[]).is_err());

        let Err(err) = track_drawdown(&dates(2), &[dec!(1)]) else {
            panic!("misaligned input must fail");
        };
        assert!(err.to_string().contains("not aligned"));
    }

    #[test]
    fn test_drawdown_overflow_is_invalid_input() {
        let Err(err) = track_drawdown(&dates(2), &[Decimal::MAX, Decimal::MIN]) else {
            panic!("drawdown outside the decimal range must fail");
        };
        assert!(err.to_string().contains("row 1"));
    }
}

//! Metrics Calculator: scalar summary statistics over the full window.

use rust_decimal::Decimal;
use tracing::debug;

use super::constants::{HUNDRED, TRADING_DAYS};
use super::math::{first_argmax, first_argmin, mean, sqrt_decimal, std_dev};
use super::streaks::longest_run;
use super::types::{DerivedSeries, DrawdownSeries, SummaryMetrics};
use crate::error::AnalyticsError;

/// Calculator for the summary statistics of a derived series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsCalculator {
    trading_days_per_year: u32,
}

impl Default for MetricsCalculator {
    fn default() -> Self {
        Self::new(TRADING_DAYS)
    }
}

impl MetricsCalculator {
    /// Create a calculator annualising with `trading_days_per_year`.
    #[must_use]
    pub const fn new(trading_days_per_year: u32) -> Self {
        Self {
            trading_days_per_year,
        }
    }

    /// Trading days per year used for annualisation.
    #[must_use]
    pub const fn trading_days_per_year(&self) -> u32 {
        self.trading_days_per_year
    }

    /// Calculate all summary metrics.
    pub fn calculate(
        &self,
        series: &DerivedSeries,
        drawdown: &DrawdownSeries,
    ) -> Result<SummaryMetrics, AnalyticsError> {
        if series.is_empty() {
            return Err(AnalyticsError::empty_series());
        }
        if drawdown.drawdown.len() != series.len() {
            return Err(AnalyticsError::invalid_input(format!(
                "drawdown series ({}) is not aligned with derived series ({})",
                drawdown.drawdown.len(),
                series.len()
            )));
        }
        if series.initial_capital <= Decimal::ZERO {
            return Err(AnalyticsError::invalid_input(
                "initial capital must be positive",
            ));
        }

        let totals = &series.total_pnl;
        let observations = totals.len() as u64;

        let (Some(best_idx), Some(worst_idx)) = (first_argmax(totals), first_argmin(totals))
        else {
            return Err(AnalyticsError::empty_series());
        };

        let total_profit_loss: Decimal = totals.iter().sum();
        let average_daily_pnl = mean(totals).unwrap_or(Decimal::ZERO);
        let average_put = mean(&series.put_pnl).unwrap_or(Decimal::ZERO);
        let average_call = mean(&series.call_pnl).unwrap_or(Decimal::ZERO);

        let (days_in_profit, days_in_loss) = Self::count_days(totals);
        let winning_percentage =
            HUNDRED * Decimal::from(days_in_profit) / Decimal::from(observations);

        let volatility = std_dev(totals);
        if volatility.is_none() {
            debug!(metric = "volatility", observations, "undefined below two observations");
        }

        let drawdown_duration = longest_run(drawdown.drawdown.iter().map(|d| *d < Decimal::ZERO));
        let max_consecutive_winning_days = longest_run(totals.iter().map(|t| *t > Decimal::ZERO));
        let max_consecutive_losing_days = longest_run(totals.iter().map(|t| *t < Decimal::ZERO));

        let capital_at_risk_pct = drawdown
            .max_drawdown
            .checked_div(series.initial_capital)
            .and_then(|ratio| ratio.checked_mul(HUNDRED))
            .ok_or_else(|| {
                AnalyticsError::invalid_input(
                    "capital at risk exceeds the representable decimal range",
                )
            })?;

        let sharpe_ratio = self.calculate_sharpe(average_daily_pnl, volatility);
        let sortino_ratio = self.calculate_sortino(average_daily_pnl, totals);
        let final_cumulative_total = series.final_cumulative_total();
        let calmar_ratio = Self::calculate_calmar(final_cumulative_total, drawdown.max_drawdown);

        if drawdown.recovery_days.is_none() {
            debug!(
                metric = "days_to_recover",
                max_drawdown_date = %drawdown.max_drawdown_date,
                "drawdown not recovered within series"
            );
        }

        Ok(SummaryMetrics {
            observations,
            initial_capital: series.initial_capital,
            total_profit_loss,
            final_cumulative_total,
            best_day: series.dates[best_idx],
            best_day_pnl: totals[best_idx],
            worst_day: series.dates[worst_idx],
            worst_day_pnl: totals[worst_idx],
            average_daily_pnl,
            average_put,
            average_call,
            days_in_profit,
            days_in_loss,
            winning_percentage,
            volatility,
            max_drawdown: drawdown.max_drawdown,
            max_drawdown_date: drawdown.max_drawdown_date,
            drawdown_duration,
            capital_at_risk_pct,
            days_to_recover: drawdown.recovery_days,
            max_consecutive_winning_days,
            max_consecutive_losing_days,
            sharpe_ratio,
            sortino_ratio,
            calmar_ratio,
        })
    }

    /// Days strictly in profit and strictly in loss; flat days count toward neither.
    fn count_days(totals: &[Decimal]) -> (u64, u64) {
        let mut profit = 0u64;
        let mut loss = 0u64;

        for total in totals {
            if *total > Decimal::ZERO {
                profit += 1;
            } else if *total < Decimal::ZERO {
                loss += 1;
            }
        }

        (profit, loss)
    }

    /// `None` for a zero-day year, which would otherwise zero every ratio.
    fn annualization_factor(&self) -> Option<Decimal> {
        if self.trading_days_per_year == 0 {
            debug!(metric = "annualization_factor", "undefined for zero trading days per year");
            return None;
        }
        sqrt_decimal(Decimal::from(self.trading_days_per_year))
    }

    /// Calculate Sharpe ratio.
    /// Sharpe = Mean(P&L) / StdDev(P&L) * sqrt(trading days)
    fn calculate_sharpe(&self, avg: Decimal, std: Option<Decimal>) -> Option<Decimal> {
        let std = std?;
        if std == Decimal::ZERO {
            debug!(metric = "sharpe_ratio", "undefined for zero variance");
            return None;
        }
        avg.checked_div(std)?
            .checked_mul(self.annualization_factor()?)
    }

    /// Calculate Sortino ratio.
    /// Sortino = Mean(P&L) / StdDev(losing days) * sqrt(trading days)
    fn calculate_sortino(&self, avg: Decimal, totals: &[Decimal]) -> Option<Decimal> {
        let downside: Vec<Decimal> = totals
            .iter()
            .filter(|t| **t < Decimal::ZERO)
            .copied()
            .collect();

        let Some(downside_dev) = std_dev(&downside) else {
            debug!(
                metric = "sortino_ratio",
                losing_days = downside.len(),
                "undefined without two losing days"
            );
            return None;
        };
        if downside_dev == Decimal::ZERO {
            debug!(metric = "sortino_ratio", "undefined for zero downside deviation");
            return None;
        }

        avg.checked_div(downside_dev)?
            .checked_mul(self.annualization_factor()?)
    }

    /// Calculate Calmar ratio.
    /// Calmar = Final cumulative P&L / |Max drawdown|
    fn calculate_calmar(final_total: Decimal, max_drawdown: Decimal) -> Option<Decimal> {
        if max_drawdown == Decimal::ZERO {
            debug!(metric = "calmar_ratio", "undefined without a drawdown");
            return None;
        }
        final_total.checked_div(max_drawdown.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::drawdown::track_drawdown;
    use crate::analytics::series::build_series;
    use crate::analytics::types::DailyRecord;
    use chrono::{Days, NaiveDate};
    use rust_decimal_macros::dec;

    fn records(totals: &[Decimal]) -> Vec<DailyRecord> {
        let Some(start) = NaiveDate::from_ymd_opt(2024, 1, 1) else {
            panic!("valid start date");
        };
        totals
            .iter()
            .enumerate()
            .map(|(i, total)| {
                let Some(date) = start.checked_add_days(Days::new(i as u64)) else {
                    panic!("date in range");
                };
                DailyRecord::new(date, *total, Decimal::ZERO)
            })
            .collect()
    }

    fn summarize(totals: &[Decimal], capital: Decimal) -> SummaryMetrics {
        let Ok(series) = build_series(&records(totals), capital) else {
            panic!("series should build");
        };
        let Ok(dd) = track_drawdown(&series.dates, &series.cumulative_total) else {
            panic!("drawdown should compute");
        };
        let Ok(metrics) = MetricsCalculator::default().calculate(&series, &dd) else {
            panic!("metrics should compute");
        };
        metrics
    }

    #[test]
    fn test_streaks() {
        let m = summarize(
            &[dec!(5), dec!(3), dec!(-2), dec!(-1), dec!(-4), dec!(6)],
            dec!(1000),
        );
        assert_eq!(m.max_consecutive_winning_days, 2);
        assert_eq!(m.max_consecutive_losing_days, 3);
        assert_eq!(m.days_in_profit, 3);
        assert_eq!(m.days_in_loss, 3);
    }

    #[test]
    fn test_flat_days_count_toward_neither_and_break_streaks() {
        let m = summarize(
            &[dec!(5), dec!(0), dec!(5), dec!(-1), dec!(0), dec!(-1)],
            dec!(1000),
        );
        assert_eq!(m.days_in_profit, 2);
        assert_eq!(m.days_in_loss, 2);
        assert_eq!(m.max_consecutive_winning_days, 1);
        assert_eq!(m.max_consecutive_losing_days, 1);
        assert_eq!(m.winning_percentage.round_dp(4), dec!(33.3333));
    }

    #[test]
    fn test_best_and_worst_day_take_first_occurrence() {
        let m = summarize(&[dec!(10), dec!(-7), dec!(10), dec!(-7)], dec!(1000));
        let Some(first) = NaiveDate::from_ymd_opt(2024, 1, 1) else {
            panic!("valid date");
        };
        let Some(second) = NaiveDate::from_ymd_opt(2024, 1, 2) else {
            panic!("valid date");
        };
        assert_eq!(m.best_day, first);
        assert_eq!(m.best_day_pnl, dec!(10));
        assert_eq!(m.worst_day, second);
        assert_eq!(m.worst_day_pnl, dec!(-7));
    }

    #[test]
    fn test_zero_variance_makes_sharpe_undefined() {
        let m = summarize(&[dec!(100), dec!(100), dec!(100)], dec!(1000));
        assert_eq!(m.volatility, Some(Decimal::ZERO));
        assert_eq!(m.sharpe_ratio, None);
        assert_eq!(m.sortino_ratio, None);
        assert_eq!(m.calmar_ratio, None);
        assert_eq!(m.days_to_recover, Some(0));
    }

    #[test]
    fn test_single_observation_volatility_undefined() {
        let m = summarize(&[dec!(250)], dec!(1000));
        assert_eq!(m.observations, 1);
        assert_eq!(m.volatility, None);
        assert_eq!(m.sharpe_ratio, None);
        assert_eq!(m.winning_percentage, dec!(100));
    }

    #[test]
    fn test_sortino_undefined_without_losing_days() {
        let m = summarize(&[dec!(10), dec!(20), dec!(5)], dec!(1000));
        assert_eq!(m.sortino_ratio, None);
        assert!(m.sharpe_ratio.is_some());
    }

    #[test]
    fn test_sharpe_and_sortino_values() {
        // mean = 2.5, sample std = sqrt(425 / 3), downside {-10, -5} std = sqrt(12.5)
        let m = summarize(&[dec!(10), dec!(-10), dec!(15), dec!(-5)], dec!(1000));

        let Some(sharpe) = m.sharpe_ratio else {
            panic!("sharpe should be defined");
        };
        assert!((sharpe - dec!(3.3343)).abs() < dec!(0.001));

        let Some(sortino) = m.sortino_ratio else {
            panic!("sortino should be defined");
        };
        // 2.5 / 3.53553 * 15.87451 = 11.2250
        assert!((sortino - dec!(11.2250)).abs() < dec!(0.001));
    }

    #[test]
    fn test_calmar_and_capital_at_risk() {
        // cumulative: 100, 40, 90 -> max drawdown -60, final 90
        let m = summarize(&[dec!(100), dec!(-60), dec!(50)], dec!(1000));
        assert_eq!(m.max_drawdown, dec!(-60));
        assert_eq!(m.capital_at_risk_pct, dec!(-6));
        assert_eq!(m.calmar_ratio, Some(dec!(1.5)));
        assert_eq!(m.drawdown_duration, 2);
        assert_eq!(m.days_to_recover, None);
    }

    #[test]
    fn test_drawdown_duration_longest_underwater_run() {
        // cumulative: 10, 5, 12, 8, 7, 6, 13
        let m = summarize(
            &[dec!(10), dec!(-5), dec!(7), dec!(-4), dec!(-1), dec!(-1), dec!(7)],
            dec!(1000),
        );
        assert_eq!(m.drawdown_duration, 3);
        assert_eq!(m.max_drawdown, dec!(-6));
        assert_eq!(m.days_to_recover, Some(1));
    }

    #[test]
    fn test_rejects_non_positive_capital() {
        let Ok(series) = build_series(&records(&[dec!(1)]), Decimal::ZERO) else {
            panic!("series should build");
        };
        let Ok(dd) = track_drawdown(&series.dates, &series.cumulative_total) else {
            panic!("drawdown should compute");
        };
        let Err(err) = MetricsCalculator::default().calculate(&series, &dd) else {
            panic!("zero capital must fail");
        };
        assert!(err.to_string().contains("initial capital"));
    }

    #[test]
    fn test_custom_annualization() {
        let m252 = summarize(&[dec!(10), dec!(-10), dec!(15), dec!(-5)], dec!(1000));
        let Ok(series) = build_series(
            &records(&[dec!(10), dec!(-10), dec!(15), dec!(-5)]),
            dec!(1000),
        ) else {
            panic!("series should build");
        };
        let Ok(dd) = track_drawdown(&series.dates, &series.cumulative_total) else {
            panic!("drawdown should compute");
        };
        let Ok(m1) = MetricsCalculator::new(1).calculate(&series, &dd) else {
            panic!("metrics should compute");
        };
        let (Some(s252), Some(s1)) = (m252.sharpe_ratio, m1.sharpe_ratio) else {
            panic!("sharpe should be defined");
        };
        assert!(s252 > s1 * dec!(15.8) && s252 < s1 * dec!(15.9));
    }

    #[test]
    fn test_sortino_undefined_with_one_losing_day() {
        let m = summarize(&[dec!(10), dec!(-5), dec!(20)], dec!(1000));
        assert_eq!(m.days_in_loss, 1);
        assert_eq!(m.sortino_ratio, None);
        assert!(m.sharpe_ratio.is_some());
    }

    #[test]
    fn test_sortino_undefined_for_identical_losing_days() {
        let m = summarize(&[dec!(10), dec!(-5), dec!(-5), dec!(20)], dec!(1000));
        assert_eq!(m.days_in_loss, 2);
        assert_eq!(m.sortino_ratio, None);
        assert!(m.sharpe_ratio.is_some());
    }

    #[test]
    fn test_zero_trading_days_leaves_ratios_undefined() {
        let totals = [dec!(10), dec!(-10), dec!(15), dec!(-5)];
        let Ok(series) = build_series(&records(&totals), dec!(1000)) else {
            panic!("series should build");
        };
        let Ok(dd) = track_drawdown(&series.dates, &series.cumulative_total) else {
            panic!("drawdown should compute");
        };
        let Ok(m) = MetricsCalculator::new(0).calculate(&series, &dd) else {
            panic!("metrics should compute");
        };
        assert_eq!(m.sharpe_ratio, None);
        assert_eq!(m.sortino_ratio, None);
        assert!(m.volatility.is_some());
        assert!(m.calmar_ratio.is_some());
    }

    #[test]
    fn test_huge_amounts_leave_volatility_undefined() {
        let big = dec!(300_000_000_000_000);
        let m = summarize(&[big, -big, big, -big], dec!(1_000_000));
        assert_eq!(m.volatility, None);
        assert_eq!(m.sharpe_ratio, None);
        assert_eq!(m.sortino_ratio, None);
        assert_eq!(m.max_drawdown, -big);
        assert_eq!(m.calmar_ratio, Some(Decimal::ZERO));
    }
}

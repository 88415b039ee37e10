//! Performance analytics for daily Put/Call P&L.
//!
//! Three pure stages run in sequence over an ordered series of
//! [`DailyRecord`]s:
//!
//! 1. [`build_series`]: per-day totals and running sums
//! 2. [`track_drawdown`]: running peak, drawdown, max drawdown and recovery
//! 3. [`MetricsCalculator`]: Sharpe, Sortino and Calmar ratios, streaks,
//!    day counts and averages
//!
//! [`analyze`] wires the stages together. Structural problems abort the run
//! with [`AnalyticsError`]; degenerate statistics are reported as `None` on
//! the affected [`SummaryMetrics`] field.

mod calculator;
mod constants;
mod drawdown;
mod math;
mod series;
mod streaks;
mod types;

use rust_decimal::Decimal;
use tracing::{debug, info_span};

use crate::error::AnalyticsError;

pub use calculator::MetricsCalculator;
pub use constants::TRADING_DAYS;
pub use drawdown::track_drawdown;
pub use series::build_series;
pub use streaks::longest_run;
pub use types::{Analysis, DailyRecord, DerivedSeries, DrawdownSeries, SummaryMetrics};

/// Run the full pipeline with the default 252-day annualisation.
pub fn analyze(
    records: &[DailyRecord],
    initial_capital: Decimal,
) -> Result<Analysis, AnalyticsError> {
    analyze_with(&MetricsCalculator::default(), records, initial_capital)
}

/// Run the full pipeline with a configured calculator.
pub fn analyze_with(
    calculator: &MetricsCalculator,
    records: &[DailyRecord],
    initial_capital: Decimal,
) -> Result<Analysis, AnalyticsError> {
    let span = info_span!("analytics.analyze", observations = records.len());
    let _enter = span.enter();

    if initial_capital <= Decimal::ZERO {
        return Err(AnalyticsError::invalid_input(
            "initial capital must be positive",
        ));
    }

    let series = build_series(records, initial_capital)?;
    debug!(
        final_cumulative_total = %series.final_cumulative_total(),
        "series built"
    );

    let drawdown = track_drawdown(&series.dates, &series.cumulative_total)?;
    debug!(
        max_drawdown = %drawdown.max_drawdown,
        max_drawdown_date = %drawdown.max_drawdown_date,
        recovery_days = ?drawdown.recovery_days,
        "drawdown tracked"
    );

    let metrics = calculator.calculate(&series, &drawdown)?;
    debug!(
        total_profit_loss = %metrics.total_profit_loss,
        sharpe_ratio = ?metrics.sharpe_ratio,
        "metrics calculated"
    );

    Ok(Analysis {
        series,
        drawdown,
        metrics,
    })
}

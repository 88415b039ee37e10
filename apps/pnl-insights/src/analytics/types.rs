//! Core value types flowing through the analytics pipeline.
//!
//! Every series type is index-aligned with the input records: position `i`
//! of any sequence describes the trading day `dates[i]`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One trading day of strategy P&L, split by option leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Trading date.
    pub date: NaiveDate,
    /// P&L of the Put leg.
    pub put_pnl: Decimal,
    /// P&L of the Call leg.
    pub call_pnl: Decimal,
}

impl DailyRecord {
    /// Create a record.
    #[must_use]
    pub const fn new(date: NaiveDate, put_pnl: Decimal, call_pnl: Decimal) -> Self {
        Self {
            date,
            put_pnl,
            call_pnl,
        }
    }

    /// Combined P&L of both legs.
    #[must_use]
    pub fn total_pnl(&self) -> Decimal {
        self.put_pnl + self.call_pnl
    }
}

/// Per-day and cumulative value series derived from the raw records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedSeries {
    /// Trading dates.
    pub dates: Vec<NaiveDate>,
    /// Put leg P&L per day.
    pub put_pnl: Vec<Decimal>,
    /// Call leg P&L per day.
    pub call_pnl: Vec<Decimal>,
    /// Put + Call per day.
    pub total_pnl: Vec<Decimal>,
    /// Running sum of `total_pnl`, starting from zero.
    pub cumulative_total: Vec<Decimal>,
    /// Running sum of the Put leg.
    pub cumulative_put: Vec<Decimal>,
    /// Running sum of the Call leg.
    pub cumulative_call: Vec<Decimal>,
    /// `initial_capital + cumulative_total`.
    pub cumulative_on_capital: Vec<Decimal>,
    /// Capital the cumulative P&L is measured against.
    pub initial_capital: Decimal,
}

impl DerivedSeries {
    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the series holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Last cumulative total, or zero for an empty series.
    #[must_use]
    pub fn final_cumulative_total(&self) -> Decimal {
        self.cumulative_total.last().copied().unwrap_or(Decimal::ZERO)
    }
}

/// Running peak and drawdown of the cumulative total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawdownSeries {
    /// Highest cumulative total seen up to and including each day.
    pub running_max: Vec<Decimal>,
    /// `cumulative_total - running_max`; never positive.
    pub drawdown: Vec<Decimal>,
    /// Most negative drawdown value (zero when the curve never dips).
    pub max_drawdown: Decimal,
    /// Index of the first day the maximum drawdown was reached.
    pub max_drawdown_index: usize,
    /// Date of the first day the maximum drawdown was reached.
    pub max_drawdown_date: NaiveDate,
    /// Calendar days from the max drawdown day until the prior peak was regained.
    ///
    /// `None` when the series ends before the peak is regained.
    pub recovery_days: Option<i64>,
}

/// Immutable snapshot of all scalar performance statistics.
///
/// Ratios and volatility whose denominator is degenerate are `None`
/// rather than an error, so callers can still use the remaining fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// Number of trading days analysed.
    pub observations: u64,
    /// Capital base.
    pub initial_capital: Decimal,
    /// Sum of daily total P&L.
    pub total_profit_loss: Decimal,
    /// Last value of the cumulative total.
    pub final_cumulative_total: Decimal,

    // Best / worst days
    /// Date with the highest total P&L (earliest on ties).
    pub best_day: NaiveDate,
    /// Total P&L on the best day.
    pub best_day_pnl: Decimal,
    /// Date with the lowest total P&L (earliest on ties).
    pub worst_day: NaiveDate,
    /// Total P&L on the worst day.
    pub worst_day_pnl: Decimal,

    // Averages
    /// Mean daily total P&L.
    pub average_daily_pnl: Decimal,
    /// Mean daily Put leg P&L.
    pub average_put: Decimal,
    /// Mean daily Call leg P&L.
    pub average_call: Decimal,

    // Day counts
    /// Days with total P&L above zero.
    pub days_in_profit: u64,
    /// Days with total P&L below zero.
    pub days_in_loss: u64,
    /// `100 * days_in_profit / observations`.
    pub winning_percentage: Decimal,

    // Risk
    /// Sample standard deviation of daily total P&L.
    pub volatility: Option<Decimal>,
    /// Most negative drawdown.
    pub max_drawdown: Decimal,
    /// Date of the maximum drawdown.
    pub max_drawdown_date: NaiveDate,
    /// Longest run of days spent below the running peak.
    pub drawdown_duration: u64,
    /// `100 * max_drawdown / initial_capital` (zero or negative).
    pub capital_at_risk_pct: Decimal,
    /// Calendar days to regain the peak preceding the max drawdown.
    pub days_to_recover: Option<i64>,

    // Streaks
    /// Longest run of profitable days.
    pub max_consecutive_winning_days: u64,
    /// Longest run of losing days.
    pub max_consecutive_losing_days: u64,

    // Risk-adjusted ratios
    /// Annualised mean / standard deviation.
    pub sharpe_ratio: Option<Decimal>,
    /// Annualised mean / downside standard deviation.
    pub sortino_ratio: Option<Decimal>,
    /// Final cumulative total / |max drawdown|.
    pub calmar_ratio: Option<Decimal>,
}

/// Output of a complete pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Per-day and cumulative series.
    pub series: DerivedSeries,
    /// Peak and drawdown profile.
    pub drawdown: DrawdownSeries,
    /// Scalar statistics.
    pub metrics: SummaryMetrics,
}

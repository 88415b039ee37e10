// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value
    )
)]

//! P&L Insights - Strategy Performance Analytics
//!
//! Computes performance analytics for a daily profit/loss history split into
//! a Put leg and a Call leg.
//!
//! # Pipeline
//!
//! Three pure, sequential stages over an ordered series of [`DailyRecord`]s:
//!
//! - **Series Builder** ([`build_series`]): per-day totals, cumulative sums per
//!   leg, cumulative total on capital
//! - **Drawdown Tracker** ([`track_drawdown`]): running peak, drawdown, max
//!   drawdown date, recovery time
//! - **Metrics Calculator** ([`MetricsCalculator`]): Sharpe, Sortino, Calmar,
//!   volatility, streaks, day counts, capital at risk
//!
//! # Collaborators
//!
//! - [`ingest`]: loads records from JSON/YAML and checks date ordering
//! - [`report`]: insights panel, chart specifications, CSV/JSON export
//! - [`config`]: YAML configuration with environment interpolation
//! - [`telemetry`]: tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use pnl_insights::{analyze, ingest::load_records};
//! use rust_decimal_macros::dec;
//!
//! let records = load_records("data/sample_pnl.yaml")?;
//! let analysis = analyze(&records, dec!(1_300_000))?;
//! println!("Sharpe: {:?}", analysis.metrics.sharpe_ratio);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Analytics core: series, drawdown and summary metrics.
pub mod analytics;

/// Configuration loading and validation.
pub mod config;

/// Error types.
pub mod error;

/// Records ingestion.
pub mod ingest;

/// Presentation and export.
pub mod report;

/// Tracing setup.
pub mod telemetry;

pub use analytics::{
    Analysis, DailyRecord, DerivedSeries, DrawdownSeries, MetricsCalculator, SummaryMetrics,
    analyze, analyze_with, build_series, track_drawdown,
};
pub use error::{AnalyticsError, ErrorCode};

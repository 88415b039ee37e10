//! Presentation helpers for the analytics output.
//!
//! Everything here consumes the read-only [`Analysis`](crate::Analysis)
//! and produces display or export artefacts:
//!
//! - [`insights`]: labelled insight lines with currency/percentage formatting
//! - [`charts`]: serialisable chart specifications
//! - [`export`]: CSV and JSON export
//! - [`format`]: number and date formatting, `N/A` for undefined metrics

pub mod charts;
pub mod export;
pub mod format;
pub mod insights;

pub use charts::{ChartKind, ChartSet, ChartSpec, Trace, TraceColor};
pub use export::{CSV_COLUMNS, ExportError, to_csv, to_json};
pub use format::{format_amount, format_date, format_pct, format_ratio};
pub use insights::{Insight, InsightsPanel};

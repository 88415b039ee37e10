//! Chart specifications for the rendering layer.
//!
//! The analytics core never draws anything. These types describe which
//! series to plot, how, and with which colours, and serialise to JSON for
//! whatever charting front end consumes them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::format::format_amount;
use crate::analytics::Analysis;

/// Colour of profitable bars.
pub const PROFIT_COLOR: &str = "green";
/// Colour of losing (and flat) bars.
pub const LOSS_COLOR: &str = "red";

/// Chart geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Connected line over dates.
    Line,
    /// One bar per date.
    Bar,
}

/// Colouring of a trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum TraceColor {
    /// Same colour for every point.
    Uniform(String),
    /// One colour per point, aligned with the trace values.
    PerPoint(Vec<String>),
}

/// A single plotted series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    /// Legend name.
    pub name: String,
    /// X values (trading dates).
    pub x: Vec<NaiveDate>,
    /// Y values.
    pub y: Vec<Decimal>,
    /// Colouring.
    pub color: TraceColor,
}

/// One chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Stable identifier.
    pub id: String,
    /// Title.
    pub title: String,
    /// Geometry.
    pub kind: ChartKind,
    /// X axis label.
    pub x_axis_title: String,
    /// Y axis label.
    pub y_axis_title: String,
    /// Plotted series.
    pub trace: Trace,
}

impl ChartSpec {
    fn new(
        id: &str,
        title: String,
        kind: ChartKind,
        y_axis_title: &str,
        trace: Trace,
    ) -> Self {
        Self {
            id: id.to_string(),
            title,
            kind,
            x_axis_title: "Date".to_string(),
            y_axis_title: y_axis_title.to_string(),
            trace,
        }
    }
}

/// Every chart of the dashboard, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSet {
    /// Charts.
    pub charts: Vec<ChartSpec>,
}

impl ChartSet {
    /// Describe the dashboard charts for `analysis`.
    #[must_use]
    pub fn from_analysis(analysis: &Analysis, currency_symbol: &str) -> Self {
        let series = &analysis.series;
        let symbol = currency_symbol.trim();
        let amount_axis = format!("Amount ({symbol})");
        let pnl_axis = format!("P&L ({symbol})");

        let trace = |name: &str, y: &[Decimal], color: &str| Trace {
            name: name.to_string(),
            x: series.dates.clone(),
            y: y.to_vec(),
            color: TraceColor::Uniform(color.to_string()),
        };

        let capital_label = format!(
            "Cumulative Total on {} Capital",
            format_amount(series.initial_capital, currency_symbol)
        );

        let charts = vec![
            ChartSpec::new(
                "cumulative_total",
                "Cumulative Total".to_string(),
                ChartKind::Line,
                &amount_axis,
                trace("Cumulative Total", &series.cumulative_total, "green"),
            ),
            ChartSpec::new(
                "daily_total",
                "Daily Total P&L (Profit: Green, Loss: Red)".to_string(),
                ChartKind::Bar,
                &pnl_axis,
                Trace {
                    name: "Daily Total P&L".to_string(),
                    x: series.dates.clone(),
                    y: series.total_pnl.clone(),
                    color: TraceColor::PerPoint(profit_loss_colors(&series.total_pnl)),
                },
            ),
            ChartSpec::new(
                "daily_call",
                "Daily Call P&L".to_string(),
                ChartKind::Bar,
                &pnl_axis,
                trace("Call P&L", &series.call_pnl, "orange"),
            ),
            ChartSpec::new(
                "daily_put",
                "Daily Put P&L".to_string(),
                ChartKind::Bar,
                &pnl_axis,
                trace("Put P&L", &series.put_pnl, "magenta"),
            ),
            ChartSpec::new(
                "cumulative_on_capital",
                capital_label.clone(),
                ChartKind::Line,
                &amount_axis,
                trace(&capital_label, &series.cumulative_on_capital, "blue"),
            ),
            ChartSpec::new(
                "cumulative_call",
                "Cumulative Total of Call Leg".to_string(),
                ChartKind::Line,
                &amount_axis,
                trace("Cumulative Call Leg", &series.cumulative_call, "orange"),
            ),
            ChartSpec::new(
                "cumulative_put",
                "Cumulative Total of Put Leg".to_string(),
                ChartKind::Line,
                &amount_axis,
                trace("Cumulative Put Leg", &series.cumulative_put, "magenta"),
            ),
            ChartSpec::new(
                "drawdown",
                "Maximum Drawdown".to_string(),
                ChartKind::Line,
                &amount_axis,
                trace("Drawdown", &analysis.drawdown.drawdown, "purple"),
            ),
        ];

        Self { charts }
    }

    /// Find a chart by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ChartSpec> {
        self.charts.iter().find(|c| c.id == id)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Green for strictly positive values, red otherwise.
#[must_use]
pub fn profit_loss_colors(values: &[Decimal]) -> Vec<String> {
    values
        .iter()
        .map(|v| {
            let color = if *v > Decimal::ZERO {
                PROFIT_COLOR
            } else {
                LOSS_COLOR
            };
            color.to_string()
        })
        .collect()
}

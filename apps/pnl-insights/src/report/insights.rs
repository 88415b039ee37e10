//! Textual insights panel built from a [`SummaryMetrics`] snapshot.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::format::{
    format_amount, format_date, format_days, format_optional_amount, format_optional_days,
    format_pct, format_ratio,
};
use crate::analytics::SummaryMetrics;

/// One labelled line of the insights panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// Human-readable label.
    pub label: String,
    /// Formatted value.
    pub value: String,
}

impl Insight {
    fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// Ordered list of insights ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightsPanel {
    /// Panel lines in display order.
    pub insights: Vec<Insight>,
}

impl InsightsPanel {
    /// Build the panel, prefixing amounts with `currency_symbol`.
    #[must_use]
    pub fn from_metrics(metrics: &SummaryMetrics, currency_symbol: &str) -> Self {
        let amount = |v| format_amount(v, currency_symbol);

        let insights = vec![
            Insight::new("Total Profit/Loss", amount(metrics.total_profit_loss)),
            Insight::new(
                "Best Trading Day",
                format!(
                    "{} with a profit of {}",
                    format_date(metrics.best_day),
                    amount(metrics.best_day_pnl)
                ),
            ),
            Insight::new(
                "Worst Trading Day",
                format!(
                    "{} with a loss of {}",
                    format_date(metrics.worst_day),
                    amount(metrics.worst_day_pnl)
                ),
            ),
            Insight::new("Average Daily Profit/Loss", amount(metrics.average_daily_pnl)),
            Insight::new("Average Profit for Call Leg", amount(metrics.average_call)),
            Insight::new("Average Profit for Put Leg", amount(metrics.average_put)),
            Insight::new("Total Days in Profit", metrics.days_in_profit.to_string()),
            Insight::new("Total Days in Loss", metrics.days_in_loss.to_string()),
            Insight::new(
                "Volatility (Std Dev of Returns)",
                format_optional_amount(metrics.volatility, currency_symbol),
            ),
            Insight::new("Winning Percentage", format_pct(metrics.winning_percentage)),
            Insight::new(
                "Max Drawdown",
                format!(
                    "{} on {}",
                    amount(metrics.max_drawdown),
                    format_date(metrics.max_drawdown_date)
                ),
            ),
            Insight::new(
                "Drawdown Duration",
                format_days(metrics.drawdown_duration as i64),
            ),
            Insight::new(
                "Max Consecutive Winning Days",
                metrics.max_consecutive_winning_days.to_string(),
            ),
            Insight::new(
                "Max Consecutive Losing Days",
                metrics.max_consecutive_losing_days.to_string(),
            ),
            Insight::new(
                "Capital at Risk (Max Drawdown)",
                format_pct(metrics.capital_at_risk_pct),
            ),
            Insight::new("Sharpe Ratio", format_ratio(metrics.sharpe_ratio)),
            Insight::new("Sortino Ratio", format_ratio(metrics.sortino_ratio)),
            Insight::new("Calmar Ratio", format_ratio(metrics.calmar_ratio)),
            Insight::new(
                "Days to Recover from Max Drawdown",
                format_optional_days(metrics.days_to_recover),
            ),
        ];

        Self { insights }
    }

    /// Look up a value by label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.insights
            .iter()
            .find(|i| i.label == label)
            .map(|i| i.value.as_str())
    }
}

impl fmt::Display for InsightsPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Insights")?;
        for insight in &self.insights {
            writeln!(f, "  {}: {}", insight.label, insight.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{DailyRecord, analyze};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn panel() -> InsightsPanel {
        let days = [1, 2, 5, 6];
        let totals = [dec!(1000), dec!(-400), dec!(-300), dec!(1200)];
        let records: Vec<DailyRecord> = days
            .iter()
            .zip(totals)
            .map(|(d, t)| {
                let Some(date) = NaiveDate::from_ymd_opt(2024, 8, *d) else {
                    panic!("valid date");
                };
                DailyRecord::new(date, t, dec!(0))
            })
            .collect();
        let Ok(analysis) = analyze(&records, dec!(100_000)) else {
            panic!("analysis should succeed");
        };
        InsightsPanel::from_metrics(&analysis.metrics, "Rs ")
    }

    #[test]
    fn test_panel_values() {
        let panel = panel();
        assert_eq!(panel.insights.len(), 19);
        assert_eq!(panel.get("Total Profit/Loss"), Some("Rs 1,500.00"));
        assert_eq!(
            panel.get("Best Trading Day"),
            Some("06 Aug 2024 with a profit of Rs 1,200.00")
        );
        assert_eq!(
            panel.get("Worst Trading Day"),
            Some("02 Aug 2024 with a loss of -Rs 400.00")
        );
        assert_eq!(panel.get("Total Days in Profit"), Some("2"));
        assert_eq!(panel.get("Winning Percentage"), Some("50.00%"));
        assert_eq!(panel.get("Drawdown Duration"), Some("2 days"));
        assert_eq!(panel.get("Capital at Risk (Max Drawdown)"), Some("-0.70%"));
        assert_eq!(panel.get("Calmar Ratio"), Some("2.14"));
        assert_eq!(panel.get("Days to Recover from Max Drawdown"), Some("1 day"));
    }

    #[test]
    fn test_undefined_metrics_render_as_not_available() {
        let panel = panel();
        // Two losing days give a defined downside deviation.
        assert_ne!(panel.get("Sortino Ratio"), Some("N/A"));

        let Some(date) = NaiveDate::from_ymd_opt(2024, 8, 1) else {
            panic!("valid date");
        };
        let records = vec![DailyRecord::new(date, dec!(10), dec!(0))];
        let Ok(analysis) = analyze(&records, dec!(1000)) else {
            panic!("analysis should succeed");
        };
        let single = InsightsPanel::from_metrics(&analysis.metrics, "$");
        assert_eq!(single.get("Volatility (Std Dev of Returns)"), Some("N/A"));
        assert_eq!(single.get("Sharpe Ratio"), Some("N/A"));
        assert_eq!(single.get("Sortino Ratio"), Some("N/A"));
        assert_eq!(single.get("Calmar Ratio"), Some("N/A"));
    }

    #[test]
    fn test_display_lists_every_insight() {
        let rendered = panel().to_string();
        assert!(rendered.starts_with("Insights\n"));
        assert!(rendered.contains("  Sharpe Ratio: "));
        assert_eq!(rendered.lines().count(), 20);
    }
}

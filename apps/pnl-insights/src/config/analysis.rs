//! Analysis parameters.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::analytics::TRADING_DAYS;

/// Parameters of the analytics pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Capital the cumulative P&L is measured against.
    #[serde(default = "default_initial_capital")]
    pub initial_capital: Decimal,
    /// Trading days per year for Sharpe/Sortino annualisation.
    #[serde(default = "default_trading_days")]
    pub trading_days_per_year: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            initial_capital: default_initial_capital(),
            trading_days_per_year: default_trading_days(),
        }
    }
}

fn default_initial_capital() -> Decimal {
    dec!(1_300_000) // 13 lakh
}

const fn default_trading_days() -> u32 {
    TRADING_DAYS
}

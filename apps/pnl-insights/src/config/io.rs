//! Input and output locations.

use serde::{Deserialize, Serialize};

/// Where daily records are read from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputConfig {
    /// Path to a `.json`, `.yaml` or `.yml` records file.
    #[serde(default = "default_input_path")]
    pub path: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

fn default_input_path() -> String {
    "data/sample_pnl.yaml".to_string()
}

/// Presentation and export settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Prefix for monetary amounts in the insights panel.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Write chart specifications as JSON to this path.
    #[serde(default)]
    pub charts_path: Option<String>,
    /// Write the index-aligned series as CSV to this path.
    #[serde(default)]
    pub csv_path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            charts_path: None,
            csv_path: None,
        }
    }
}

fn default_currency_symbol() -> String {
    "Rs ".to_string()
}

//! CSV and JSON export of analysis results.

use std::string::FromUtf8Error;

use thiserror::Error;

use crate::analytics::Analysis;

/// Column names written as the first CSV record.
pub const CSV_COLUMNS: [&str; 10] = [
    "date",
    "put",
    "call",
    "total",
    "cumulative_total",
    "cumulative_put",
    "cumulative_call",
    "cumulative_on_capital",
    "running_max",
    "drawdown",
];

/// Errors raised while exporting series.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing a CSV record failed.
    #[error("Failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the CSV buffer failed.
    #[error("Failed to flush CSV buffer: {0}")]
    Flush(#[from] std::io::Error),

    /// The CSV buffer was not valid UTF-8.
    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Export the index-aligned series to CSV, one row per trading day.
pub fn to_csv(analysis: &Analysis) -> Result<String, ExportError> {
    let s = &analysis.series;
    let d = &analysis.drawdown;

    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(CSV_COLUMNS)?;

    for i in 0..s.len() {
        wtr.write_record(&[
            s.dates[i].to_string(),
            s.put_pnl[i].to_string(),
            s.call_pnl[i].to_string(),
            s.total_pnl[i].to_string(),
            s.cumulative_total[i].to_string(),
            s.cumulative_put[i].to_string(),
            s.cumulative_call[i].to_string(),
            s.cumulative_on_capital[i].to_string(),
            d.running_max[i].to_string(),
            d.drawdown[i].to_string(),
        ])?;
    }

    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Export the whole analysis to pretty JSON.
pub fn to_json(analysis: &Analysis) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(analysis)
}

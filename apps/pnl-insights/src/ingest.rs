//! Loading daily P&L records from disk.
//!
//! Accepted layouts (JSON or YAML, chosen by file extension):
//!
//! ```yaml
//! records:
//!   - date: 01 Aug 2024   # or 2024-08-01
//!     put: -14407
//!     call: 16702
//! ```
//!
//! Records must already be in chronological order; [`validate_records`]
//! rejects empty input, duplicate dates and out-of-order rows.

use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::analytics::DailyRecord;
use crate::error::AnalyticsError;

/// Date formats accepted in records files, tried in order.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d %b %Y"];

/// Errors raised while loading records.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read the records file.
    #[error("Failed to read records file '{path}': {source}")]
    ReadError {
        /// Path to the records file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// File extension is not one of json, yaml, yml.
    #[error("Unsupported records format '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    /// Malformed JSON.
    #[error("Failed to parse records JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed YAML.
    #[error("Failed to parse records YAML: {0}")]
    Yaml(#[from] serde_yaml_bw::Error),

    /// A date field could not be parsed.
    #[error("Row {row}: unrecognised date '{value}'")]
    InvalidDate {
        /// Zero-based row index.
        row: usize,
        /// The raw date text.
        value: String,
    },

    /// Records violate a structural precondition.
    #[error(transparent)]
    Invalid(#[from] AnalyticsError),
}

#[derive(Debug, Deserialize)]
struct RecordsFile {
    records: Vec<RawRecord>,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    date: String,
    put: Decimal,
    call: Decimal,
}

/// Records file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordsFormat {
    /// JSON document.
    Json,
    /// YAML document.
    Yaml,
}

impl RecordsFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(IngestError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Load and validate records from a JSON or YAML file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<DailyRecord>, IngestError> {
    let path = path.as_ref();
    let format = RecordsFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path).map_err(|e| IngestError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let records = parse_records(&contents, format)?;
    debug!(path = %path.display(), count = records.len(), "records loaded");
    Ok(records)
}

/// Parse and validate records from a string.
pub fn parse_records(
    contents: &str,
    format: RecordsFormat,
) -> Result<Vec<DailyRecord>, IngestError> {
    let file: RecordsFile = match format {
        RecordsFormat::Json => serde_json::from_str(contents)?,
        RecordsFormat::Yaml => serde_yaml_bw::from_str(contents)?,
    };

    let records = file
        .records
        .into_iter()
        .enumerate()
        .map(|(row, raw)| {
            let date = parse_date(&raw.date).ok_or_else(|| IngestError::InvalidDate {
                row,
                value: raw.date.clone(),
            })?;
            Ok(DailyRecord::new(date, raw.put, raw.call))
        })
        .collect::<Result<Vec<_>, IngestError>>()?;

    validate_records(&records)?;
    Ok(records)
}

/// Parse a date in any of the accepted formats.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

/// Check records are non-empty with strictly increasing dates.
pub fn validate_records(records: &[DailyRecord]) -> Result<(), AnalyticsError> {
    if records.is_empty() {
        return Err(AnalyticsError::empty_series());
    }

    for (row, pair) in records.windows(2).enumerate() {
        let (prev, next) = (pair[0].date, pair[1].date);
        if next == prev {
            warn!(row = row + 1, date = %next, "duplicate date");
            return Err(AnalyticsError::invalid_input(format!(
                "row {}: duplicate date {next}",
                row + 1
            )));
        }
        if next < prev {
            warn!(row = row + 1, date = %next, previous = %prev, "dates out of order");
            return Err(AnalyticsError::invalid_input(format!(
                "row {}: date {next} precedes {prev}",
                row + 1
            )));
        }
    }

    Ok(())
}

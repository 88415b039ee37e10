//! Error types for the analytics pipeline.
//!
//! The pipeline distinguishes two failure classes:
//!
//! | Class | Representation | Effect |
//! |-------|----------------|--------|
//! | Structural violation (empty series, non-positive capital, misaligned input) | [`AnalyticsError::InvalidInput`] | Aborts the whole run |
//! | Degenerate statistic (zero variance, no losing days, no recovery) | `None` on the affected [`SummaryMetrics`](crate::SummaryMetrics) field | Recorded per metric |

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input violates a structural precondition.
    InvalidInput,
}

impl ErrorCode {
    /// Get the error reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// Errors raised by the analytics pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    /// Input violates a structural precondition.
    #[error("[INVALID_INPUT] {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },
}

impl AnalyticsError {
    /// Invalid input.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Empty input series.
    #[must_use]
    pub fn empty_series() -> Self {
        Self::invalid_input("series must contain at least one observation")
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput { .. } => ErrorCode::InvalidInput,
        }
    }
}

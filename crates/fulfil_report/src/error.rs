//! Error types for report rendering.

use thiserror::Error;

/// Result type alias for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors that can occur while preparing presentation data.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Unknown report format: {0} (expected text, json or markdown)")]
    UnknownFormat(String),

    #[error("Unknown currency: {0} (expected INR, USD or EUR)")]
    UnknownCurrency(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

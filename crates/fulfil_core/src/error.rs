//! Error types for the cost engine.

use std::path::PathBuf;
use thiserror::Error;

use crate::inputs::InputViolation;
use crate::metrics::MetricName;

/// Result type alias for cost engine operations.
pub type CostResult<T> = Result<T, CostError>;

/// Errors that can occur while validating inputs, loading rates or computing costs.
#[derive(Error, Debug)]
pub enum CostError {
    #[error("Invalid input: {}", join_violations(.violations))]
    InvalidInput { violations: Vec<InputViolation> },

    #[error("Undefined metric: {metric} - {reason}")]
    UndefinedMetric { metric: MetricName, reason: String },

    #[error("Non-finite result for {0}")]
    NonFinite(String),

    #[error("Invalid cost rates: {0}")]
    InvalidRates(String),

    #[error("Unsupported rates file format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CostError {
    /// Whether the caller should re-prompt for corrected inputs.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CostError::InvalidInput { .. })
    }

    /// Whether the error came from loading or validating rate configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            CostError::InvalidRates(_)
                | CostError::UnsupportedFormat(_)
                | CostError::Io(_)
                | CostError::Yaml(_)
                | CostError::Toml(_)
                | CostError::Json(_)
        )
    }
}

fn join_violations(violations: &[InputViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

//! fulfil CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Invalid input
//! - 4: Configuration error
//! - 5: Undefined metric

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fulfil_core::CostError;
use fulfil_report::ReportError;

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const INVALID_INPUT: u8 = 3;
    pub const CONFIG_ERROR: u8 = 4;
    pub const UNDEFINED_METRIC: u8 = 5;
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "fulfil=debug,warn"
    } else {
        "fulfil=info,warn"
    };

    // Logs go to stderr so rendered reports on stdout stay clean
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .try_init();

    let result = match cli.command {
        Commands::Calculate(args) => commands::calculate::execute(args).await,
        Commands::Rates(args) => commands::rates::execute(args).await,
        Commands::Bounds(args) => commands::bounds::execute(args).await,
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    if let Some(err) = e.downcast_ref::<CostError>() {
        return match err {
            CostError::InvalidInput { .. } | CostError::NonFinite(_) => ExitCodes::INVALID_INPUT,
            CostError::UndefinedMetric { .. } => ExitCodes::UNDEFINED_METRIC,
            err if err.is_configuration() => ExitCodes::CONFIG_ERROR,
            _ => ExitCodes::GENERAL_ERROR,
        };
    }

    match e.downcast_ref::<ReportError>() {
        Some(ReportError::UnknownFormat(_)) | Some(ReportError::UnknownCurrency(_)) => {
            ExitCodes::INVALID_ARGS
        }
        _ => ExitCodes::GENERAL_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use fulfil_core::{InputField, InputViolation, MetricName};

    #[test]
    fn test_invalid_input_exit_code() {
        let err: anyhow::Error = CostError::InvalidInput {
            violations: vec![InputViolation::new(
                InputField::MonthlyOrders,
                0.0,
                "must be at least 1",
            )],
        }
        .into();
        assert_eq!(categorize_error(&err), ExitCodes::INVALID_INPUT);
    }

    #[test]
    fn test_config_error_through_context() {
        let err = Err::<(), _>(CostError::InvalidRates("bad".to_string()))
            .context("Failed to load cost rates")
            .unwrap_err();
        assert_eq!(categorize_error(&err), ExitCodes::CONFIG_ERROR);
    }

    #[test]
    fn test_undefined_metric_exit_code() {
        let err: anyhow::Error = CostError::UndefinedMetric {
            metric: MetricName::CostPerOrder,
            reason: "monthly orders is zero".to_string(),
        }
        .into();
        assert_eq!(categorize_error(&err), ExitCodes::UNDEFINED_METRIC);
    }

    #[test]
    fn test_unknown_format_is_invalid_args() {
        let err: anyhow::Error = ReportError::UnknownFormat("pdf".to_string()).into();
        assert_eq!(categorize_error(&err), ExitCodes::INVALID_ARGS);
    }

    #[test]
    fn test_other_errors_are_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(categorize_error(&err), ExitCodes::GENERAL_ERROR);
    }
}

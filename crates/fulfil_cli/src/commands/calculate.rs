//! Calculate command - Compute fulfillment costs and render a report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info, warn};

use fulfil_core::{CostEngine, CostRates, InputBounds, OperationalInputs};
use fulfil_report::{CostReport, Currency, ReportFormat};

#[derive(Args)]
pub struct CalculateArgs {
    /// Storage volume in cubic meters
    #[arg(
        long,
        default_value_t = 100.0,
        env = "FULFIL_STORAGE_VOLUME",
        allow_negative_numbers = true
    )]
    storage_volume: f64,

    /// Orders shipped per month
    #[arg(long, default_value_t = 500, env = "FULFIL_MONTHLY_ORDERS")]
    monthly_orders: u64,

    /// Average revenue per order
    #[arg(
        long,
        default_value_t = 1000.0,
        env = "FULFIL_AVG_ORDER_VALUE",
        allow_negative_numbers = true
    )]
    avg_order_value: f64,

    /// Average number of products per order
    #[arg(
        long,
        default_value_t = 2.0,
        env = "FULFIL_AVG_PRODUCTS_PER_ORDER",
        allow_negative_numbers = true
    )]
    avg_products_per_order: f64,

    /// Average product weight in kilograms
    #[arg(
        long,
        default_value_t = 0.5,
        env = "FULFIL_AVG_PRODUCT_WEIGHT",
        allow_negative_numbers = true
    )]
    avg_product_weight: f64,

    /// Return rate in percent
    #[arg(
        long,
        default_value_t = 5.0,
        env = "FULFIL_RETURN_RATE",
        allow_negative_numbers = true
    )]
    return_rate: f64,

    /// Rates file (YAML, TOML or JSON)
    #[arg(long, env = "FULFIL_RATES_FILE")]
    rates: Option<PathBuf>,

    /// Display currency (INR, USD, EUR)
    #[arg(long, default_value = "INR")]
    currency: String,

    /// Output format (text, markdown, json)
    #[arg(long, default_value = "text")]
    format: String,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pass values to the engine as given, without clamping to the adjustable ranges
    #[arg(long)]
    no_clamp: bool,
}

impl CalculateArgs {
    fn inputs(&self) -> OperationalInputs {
        OperationalInputs {
            storage_volume: self.storage_volume,
            monthly_orders: self.monthly_orders,
            avg_order_value: self.avg_order_value,
            avg_products_per_order: self.avg_products_per_order,
            avg_product_weight: self.avg_product_weight,
            return_rate: self.return_rate,
        }
    }
}

pub async fn execute(args: CalculateArgs) -> Result<()> {
    let currency: Currency = args.currency.parse()?;
    let format: ReportFormat = args.format.parse()?;

    let rates = CostRates::load(args.rates.as_deref()).context("Failed to load cost rates")?;
    let engine = CostEngine::new(rates)?;

    let requested = args.inputs();
    let inputs = if args.no_clamp {
        requested
    } else {
        clamp_to_bounds(&requested)
    };
    debug!("Effective inputs: {:?}", inputs);

    info!(
        "Computing fulfillment costs for {} orders/month",
        inputs.monthly_orders
    );
    let analysis = engine.compute(&inputs)?;

    let report = CostReport::new(inputs, engine.rates().clone(), analysis, currency);
    let rendered = report.render(format)?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, rendered)
                .await
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report {} written to {}", report.id, path.display());
            println!("📄 Report written to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Apply the Input Controller ranges, warning about each adjusted field.
fn clamp_to_bounds(inputs: &OperationalInputs) -> OperationalInputs {
    let bounds = InputBounds::default();
    for violation in bounds.check(inputs) {
        warn!("Clamping {}: {} {}", violation.field, violation.value, violation.message);
    }
    bounds.clamp(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: CalculateArgs,
    }

    #[test]
    fn test_defaults_match_reference_inputs() {
        let cli = TestCli::parse_from(["fulfil"]);
        assert_eq!(cli.args.inputs(), OperationalInputs::default());
        assert!(!cli.args.no_clamp);
    }

    #[test]
    fn test_negative_values_reach_the_engine() {
        let cli = TestCli::parse_from(["fulfil", "--return-rate", "-5", "--no-clamp"]);
        let inputs = cli.args.inputs();
        assert_eq!(inputs.return_rate, -5.0);
        assert!(CostEngine::default().compute(&inputs).is_err());
    }

    #[test]
    fn test_clamping_keeps_inputs_computable() {
        let inputs = OperationalInputs::default()
            .with_monthly_orders(0)
            .with_return_rate(80.0);
        let clamped = clamp_to_bounds(&inputs);

        assert_eq!(clamped.monthly_orders, 10);
        assert_eq!(clamped.return_rate, 30.0);
        assert!(CostEngine::default().compute(&clamped).is_ok());
    }

    #[tokio::test]
    async fn test_writes_report_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("report.json");
        let cli = TestCli::parse_from([
            "fulfil",
            "--format",
            "json",
            "--currency",
            "usd",
            "--output",
            path.to_str().unwrap(),
        ]);

        execute(cli.args).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["currency"], "USD");
        assert_eq!(value["analysis"]["metrics"]["costPerOrder"], 227.5);
    }
}

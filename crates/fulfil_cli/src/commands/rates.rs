//! Rates command - Show the effective unit cost rates.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use fulfil_core::CostRates;

#[derive(Args)]
pub struct RatesArgs {
    /// Rates file (YAML, TOML or JSON)
    #[arg(long, env = "FULFIL_RATES_FILE")]
    rates: Option<PathBuf>,

    /// Output format (text, json, yaml)
    #[arg(long, default_value = "text", value_parser = ["text", "json", "yaml"])]
    format: String,
}

pub async fn execute(args: RatesArgs) -> Result<()> {
    match &args.rates {
        Some(path) => info!("Loading rates from {}", path.display()),
        None => info!("Using default rates"),
    }

    let rates = CostRates::load(args.rates.as_deref()).context("Failed to load cost rates")?;
    println!("{}", render(&rates, &args.format)?);
    Ok(())
}

fn render(rates: &CostRates, format: &str) -> Result<String> {
    match format {
        "json" => serde_json::to_string_pretty(rates).context("Failed to serialize rates"),
        "yaml" => serde_yaml::to_string(rates).context("Failed to serialize rates"),
        "text" => {
            let mut out = String::from("Unit cost rates:\n");
            for (name, value) in rates.entries() {
                out.push_str(&format!("  {:<22} {}\n", name, value));
            }
            Ok(out)
        }
        other => anyhow::bail!("Unknown output option: {} (expected text, json or yaml)", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text() {
        let text = render(&CostRates::default(), "text").unwrap();
        assert!(text.contains("packing_unit_cost"));
        assert!(text.contains("500"));
    }

    #[test]
    fn test_render_yaml_round_trips() {
        let yaml = render(&CostRates::default(), "yaml").unwrap();
        let parsed: CostRates = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, CostRates::default());
    }

    #[test]
    fn test_render_unknown_format() {
        assert!(render(&CostRates::default(), "xml").is_err());
    }
}

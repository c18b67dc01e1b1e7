//! Bounds command - Show the adjustable input ranges.

use anyhow::{Context, Result};
use clap::Args;

use fulfil_core::{InputBounds, InputField, OperationalInputs};

#[derive(Args)]
pub struct BoundsArgs {
    /// Output format (text, json)
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    format: String,
}

pub async fn execute(args: BoundsArgs) -> Result<()> {
    let bounds = InputBounds::default();

    if args.format == "json" {
        let json = serde_json::to_string_pretty(&bounds).context("Failed to serialize bounds")?;
        println!("{}", json);
        return Ok(());
    }

    let defaults = OperationalInputs::default();
    println!(
        "{:<28} {:>8} {:>8} {:>6} {:>8}  unit",
        "field", "min", "max", "step", "default"
    );
    for field in InputField::ALL {
        let range = bounds.get(field);
        println!(
            "{:<28} {:>8} {:>8} {:>6} {:>8}  {}",
            field.label(),
            range.min,
            range.max,
            range.step,
            defaults.value(field),
            field.unit().unwrap_or("")
        );
    }

    Ok(())
}

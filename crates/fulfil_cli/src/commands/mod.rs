//! CLI command definitions.
//!
//! Each subcommand is one way of driving the cost engine from the terminal.

use clap::{Parser, Subcommand};

pub mod bounds;
pub mod calculate;
pub mod rates;

/// fulfil - E-commerce fulfillment cost calculator
#[derive(Parser)]
#[command(name = "fulfil")]
#[command(version, about = "fulfil - E-commerce fulfillment cost calculator")]
#[command(long_about = r#"
fulfil computes monthly fulfillment costs (receiving, storage, picking,
packing, shipping, returns) from a handful of operational inputs, and
compares them against revenue.

COMMANDS:
  calculate  → Compute the cost breakdown and render a report
  rates      → Show the effective unit cost rates
  bounds     → Show the adjustable input ranges

RATES:
  Unit costs come from --rates <file> (YAML, TOML or JSON) and can be
  overridden with FULFIL_* environment variables, e.g.
  FULFIL_PACKING_UNIT_COST=12.

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Invalid input
  4 - Configuration error
  5 - Undefined metric
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute fulfillment costs for a set of operational inputs
    Calculate(calculate::CalculateArgs),

    /// Show the effective unit cost rates
    Rates(rates::RatesArgs),

    /// Show the adjustable range of each input
    Bounds(bounds::BoundsArgs),
}

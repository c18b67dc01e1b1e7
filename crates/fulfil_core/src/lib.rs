//! # fulfil_core
//!
//! Fulfillment cost calculation engine.
//!
//! This crate turns a snapshot of operational inputs (storage volume, order
//! volume, product mix, weight, return rate) into a monthly cost breakdown and
//! the derived metrics presentation layers rely on.
//!
//! ## Features
//!
//! - **Inputs**: Immutable operational snapshot with domain validation
//! - **Bounds**: Input Controller ranges for clamping user-edited values
//! - **Rates**: Tunable unit costs loaded from YAML, TOML, JSON or environment
//! - **Engine**: Pure, stateless computation of the six cost categories
//! - **Metrics**: Cost per order, annual cost, revenue comparison
//!
//! ## Example
//!
//! ```rust
//! use fulfil_core::{CostEngine, CostRates, OperationalInputs};
//!
//! let engine = CostEngine::new(CostRates::default()).unwrap();
//! let inputs = OperationalInputs::default().with_monthly_orders(1_000);
//!
//! let analysis = engine.compute(&inputs).unwrap();
//! println!("Cost per order: {:.2}", analysis.metrics.cost_per_order);
//! for (category, amount) in analysis.breakdown.iter() {
//!     println!("{category}: {amount:.2}");
//! }
//! ```

pub mod bounds;
pub mod breakdown;
pub mod engine;
pub mod error;
pub mod inputs;
pub mod metrics;
pub mod rates;

pub use bounds::{FieldBounds, InputBounds};
pub use breakdown::{CostBreakdown, CostCategory};
pub use engine::{compute, CostAnalysis, CostEngine};
pub use error::{CostError, CostResult};
pub use inputs::{InputField, InputViolation, OperationalInputs};
pub use metrics::{DerivedMetrics, MetricName, MONTHS_PER_YEAR};
pub use rates::{CostRates, RatesFormat};

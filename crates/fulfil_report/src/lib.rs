//! # fulfil_report
//!
//! Stateless presentation helpers for fulfillment cost analyses.
//!
//! Everything here consumes the engine's output read-only:
//! - **Currency**: Symbol and digit grouping per currency
//! - **Charts**: Category slices and revenue comparison bars
//! - **Summary**: The three headline cards (per order, monthly, annual)
//! - **Report**: Timestamped document rendered as text, Markdown or JSON
//!
//! ## Example
//!
//! ```rust
//! use fulfil_core::{CostEngine, OperationalInputs};
//! use fulfil_report::{format_currency, summary_cards, Currency};
//!
//! let analysis = CostEngine::default()
//!     .compute(&OperationalInputs::default())
//!     .unwrap();
//!
//! assert_eq!(
//!     format_currency(analysis.metrics.monthly_cost, Currency::Inr, true),
//!     "₹1,13,750.00"
//! );
//! for card in summary_cards(&analysis.metrics, Currency::Inr) {
//!     println!("{}: {}", card.title, card.value);
//! }
//! ```

pub mod chart;
pub mod currency;
pub mod error;
pub mod report;
pub mod summary;

pub use chart::{breakdown_series, comparison_series, revenue_caption, ChartSlice, ComparisonBar};
pub use currency::{format_currency, format_percent, Currency};
pub use error::{ReportError, ReportResult};
pub use report::{CostReport, ReportFormat, REPORT_TITLE};
pub use summary::{summary_cards, SummaryCard};

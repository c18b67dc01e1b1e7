//! Chart-ready series built from an analysis.

use serde::{Deserialize, Serialize};

use fulfil_core::{CostBreakdown, CostCategory, DerivedMetrics};

use crate::currency::format_percent;

/// One slice of the category breakdown chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSlice {
    pub category: CostCategory,
    pub label: String,
    pub amount: f64,
    /// Share of the monthly total, in percent. `None` when the total is zero.
    pub share_percent: Option<f64>,
}

impl ChartSlice {
    /// Share rounded to a whole percent for tooltips.
    pub fn rounded_share(&self) -> Option<u32> {
        self.share_percent.map(|share| share.round() as u32)
    }
}

/// One bar of the revenue comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonBar {
    pub label: String,
    pub value: f64,
}

/// One slice per category. Amounts are always present; shares are dropped
/// when they are undefined.
pub fn breakdown_series(breakdown: &CostBreakdown) -> Vec<ChartSlice> {
    breakdown
        .iter()
        .map(|(category, amount)| ChartSlice {
            category,
            label: category.label().to_string(),
            amount,
            share_percent: breakdown.share_percent(category).ok(),
        })
        .collect()
}

/// Revenue, fulfillment cost and what is left.
pub fn comparison_series(metrics: &DerivedMetrics) -> Vec<ComparisonBar> {
    [
        ("Monthly Revenue", metrics.monthly_revenue),
        ("Fulfillment Cost", metrics.monthly_cost),
        ("Net Value", metrics.net_value),
    ]
    .into_iter()
    .map(|(label, value)| ComparisonBar {
        label: label.to_string(),
        value,
    })
    .collect()
}

pub fn revenue_caption(metrics: &DerivedMetrics) -> String {
    format!(
        "Fulfillment costs represent {} of revenue",
        format_percent(metrics.cost_to_revenue_ratio, 1)
    )
}

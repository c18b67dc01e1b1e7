//! Headline metric cards.

use serde::{Deserialize, Serialize};

use fulfil_core::DerivedMetrics;

use crate::currency::{format_currency, Currency};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCard {
    pub title: String,
    pub value: String,
    pub description: String,
}

impl SummaryCard {
    fn new(title: &str, value: String, description: &str) -> Self {
        Self {
            title: title.to_string(),
            value,
            description: description.to_string(),
        }
    }
}

/// Cost per order, monthly cost and annual cost, formatted for display.
pub fn summary_cards(metrics: &DerivedMetrics, currency: Currency) -> [SummaryCard; 3] {
    [
        SummaryCard::new(
            "Cost per Order",
            format_currency(metrics.cost_per_order, currency, true),
            "Average fulfillment cost per customer order",
        ),
        SummaryCard::new(
            "Monthly Cost",
            format_currency(metrics.monthly_cost, currency, true),
            "Total monthly fulfillment expenses",
        ),
        SummaryCard::new(
            "Annual Cost",
            format_currency(metrics.annual_cost, currency, true),
            "Projected yearly fulfillment costs",
        ),
    ]
}

//! Aggregate metrics derived from a breakdown and its inputs.

use serde::{Deserialize, Serialize};

use crate::breakdown::CostBreakdown;
use crate::error::{CostError, CostResult};
use crate::inputs::OperationalInputs;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Metrics that have a denominator and can therefore be undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricName {
    CostPerOrder,
    CostToRevenueRatio,
    CategoryShare,
}

impl std::fmt::Display for MetricName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricName::CostPerOrder => write!(f, "costPerOrder"),
            MetricName::CostToRevenueRatio => write!(f, "costToRevenueRatio"),
            MetricName::CategoryShare => write!(f, "categoryShare"),
        }
    }
}

/// Divide, flagging a zero or non-finite denominator instead of producing NaN/∞.
pub(crate) fn checked_ratio(
    metric: MetricName,
    numerator: f64,
    denominator: f64,
    denominator_name: &str,
) -> CostResult<f64> {
    if denominator == 0.0 {
        return Err(CostError::UndefinedMetric {
            metric,
            reason: format!("{denominator_name} is zero"),
        });
    }
    if !numerator.is_finite() || !denominator.is_finite() {
        return Err(CostError::UndefinedMetric {
            metric,
            reason: format!("non-finite operand ({numerator} / {denominator})"),
        });
    }

    ensure_finite(numerator / denominator, &metric.to_string())
}

pub(crate) fn ensure_finite(value: f64, quantity: &str) -> CostResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CostError::NonFinite(quantity.to_string()))
    }
}

/// Monthly cost divided by monthly orders.
pub fn cost_per_order(monthly_cost: f64, monthly_orders: u64) -> CostResult<f64> {
    checked_ratio(
        MetricName::CostPerOrder,
        monthly_cost,
        monthly_orders as f64,
        "monthly orders",
    )
}

/// Monthly cost as a percentage of monthly revenue.
pub fn cost_to_revenue_ratio(monthly_cost: f64, monthly_revenue: f64) -> CostResult<f64> {
    let ratio = checked_ratio(
        MetricName::CostToRevenueRatio,
        monthly_cost,
        monthly_revenue,
        "monthly revenue",
    )?;
    ensure_finite(ratio * 100.0, &MetricName::CostToRevenueRatio.to_string())
}

/// Aggregate figures for one computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    /// Sum of all categories
    pub monthly_cost: f64,
    /// Monthly cost per order
    pub cost_per_order: f64,
    /// Monthly cost times twelve
    pub annual_cost: f64,
    /// Average order value times monthly orders
    pub monthly_revenue: f64,
    /// Revenue left after fulfillment
    pub net_value: f64,
    /// Fulfillment cost as a percentage of revenue
    pub cost_to_revenue_ratio: f64,
}

impl DerivedMetrics {
    pub fn derive(breakdown: &CostBreakdown, inputs: &OperationalInputs) -> CostResult<Self> {
        let monthly_cost = ensure_finite(breakdown.total(), "monthlyCost")?;
        let annual_cost = ensure_finite(monthly_cost * MONTHS_PER_YEAR, "annualCost")?;
        let monthly_revenue = ensure_finite(
            inputs.avg_order_value * inputs.monthly_orders as f64,
            "monthlyRevenue",
        )?;

        Ok(Self {
            monthly_cost,
            cost_per_order: cost_per_order(monthly_cost, inputs.monthly_orders)?,
            annual_cost,
            monthly_revenue,
            net_value: monthly_revenue - monthly_cost,
            cost_to_revenue_ratio: cost_to_revenue_ratio(monthly_cost, monthly_revenue)?,
        })
    }

    pub fn is_profitable(&self) -> bool {
        self.net_value > 0.0
    }
}

//! Cost engine.
//!
//! A pure function of `(rates, inputs)`: no I/O, no logging, no shared state.
//! Each call validates its inputs independently and either returns a fully
//! materialized result or an error; partial results are never returned.

use serde::{Deserialize, Serialize};

use crate::breakdown::CostBreakdown;
use crate::error::CostResult;
use crate::inputs::OperationalInputs;
use crate::metrics::{ensure_finite, DerivedMetrics};
use crate::rates::CostRates;

/// Breakdown plus derived metrics for one input snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostAnalysis {
    pub breakdown: CostBreakdown,
    pub metrics: DerivedMetrics,
}

/// Stateless calculator bound to a validated set of rates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostEngine {
    rates: CostRates,
}

impl CostEngine {
    pub fn new(rates: CostRates) -> CostResult<Self> {
        rates.validate()?;
        Ok(Self { rates })
    }

    pub fn rates(&self) -> &CostRates {
        &self.rates
    }

    /// Compute the six monthly cost categories.
    pub fn breakdown(&self, inputs: &OperationalInputs) -> CostResult<CostBreakdown> {
        inputs.ensure_valid()?;

        let r = &self.rates;
        let orders = inputs.monthly_orders as f64;
        let products = inputs.avg_products_per_order;
        let items = inputs.monthly_items();
        // `+ 0.0` turns a -0.0 return rate into +0.0
        let returned_share = inputs.return_rate / 100.0 + 0.0;

        let breakdown = CostBreakdown {
            receiving: r.receiving_unit_cost * items,
            storage: r.storage_unit_cost * inputs.storage_volume,
            picking: r.picking_unit_cost * items,
            packing: r.packing_unit_cost * orders,
            shipping: (r.shipping_base_cost
                + r.shipping_per_kg_cost * inputs.avg_product_weight * products)
                * orders,
            returns: r.return_unit_cost * items * returned_share,
        };

        for (category, amount) in breakdown.iter() {
            ensure_finite(amount, category.label())?;
        }

        Ok(breakdown)
    }

    /// Compute the breakdown and every derived metric.
    pub fn compute(&self, inputs: &OperationalInputs) -> CostResult<CostAnalysis> {
        let breakdown = self.breakdown(inputs)?;
        let metrics = DerivedMetrics::derive(&breakdown, inputs)?;
        Ok(CostAnalysis { breakdown, metrics })
    }
}

/// Compute with the default rates.
pub fn compute(inputs: &OperationalInputs) -> CostResult<CostAnalysis> {
    CostEngine::default().compute(inputs)
}

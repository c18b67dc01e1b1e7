//! Monthly cost breakdown by category.

use serde::{Deserialize, Serialize};

use crate::error::CostResult;
use crate::metrics::{checked_ratio, MetricName};

/// One of the six fulfillment cost line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostCategory {
    Receiving,
    Storage,
    Picking,
    Packing,
    Shipping,
    Returns,
}

impl CostCategory {
    /// All categories in display order.
    pub const ALL: [CostCategory; 6] = [
        CostCategory::Receiving,
        CostCategory::Storage,
        CostCategory::Picking,
        CostCategory::Packing,
        CostCategory::Shipping,
        CostCategory::Returns,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CostCategory::Receiving => "Receiving",
            CostCategory::Storage => "Storage",
            CostCategory::Picking => "Picking",
            CostCategory::Packing => "Packing",
            CostCategory::Shipping => "Shipping",
            CostCategory::Returns => "Returns",
        }
    }

    /// The cost driver behind the category.
    pub fn driver(&self) -> &'static str {
        match self {
            CostCategory::Receiving => "per item received",
            CostCategory::Storage => "per cubic meter per month",
            CostCategory::Picking => "per item picked",
            CostCategory::Packing => "per order packed",
            CostCategory::Shipping => "per order plus per kilogram shipped",
            CostCategory::Returns => "per item returned",
        }
    }
}

impl std::fmt::Display for CostCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Non-negative monthly amount per category.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub receiving: f64,
    pub storage: f64,
    pub picking: f64,
    pub packing: f64,
    pub shipping: f64,
    pub returns: f64,
}

impl CostBreakdown {
    pub fn get(&self, category: CostCategory) -> f64 {
        match category {
            CostCategory::Receiving => self.receiving,
            CostCategory::Storage => self.storage,
            CostCategory::Picking => self.picking,
            CostCategory::Packing => self.packing,
            CostCategory::Shipping => self.shipping,
            CostCategory::Returns => self.returns,
        }
    }

    /// Iterate `(category, amount)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (CostCategory, f64)> + '_ {
        CostCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Sum of all six categories. This is the monthly cost; nothing else is added.
    pub fn total(&self) -> f64 {
        self.receiving + self.storage + self.picking + self.packing + self.shipping + self.returns
    }

    /// Category amount as a percentage of the total.
    pub fn share_percent(&self, category: CostCategory) -> CostResult<f64> {
        let share = checked_ratio(
            MetricName::CategoryShare,
            self.get(category),
            self.total(),
            "total monthly cost",
        )?;
        Ok(share * 100.0)
    }

    /// The most expensive category. Ties go to the earlier one in display order.
    pub fn largest(&self) -> (CostCategory, f64) {
        self.iter()
            .fold((CostCategory::Receiving, self.receiving), |best, current| {
                if current.1 > best.1 {
                    current
                } else {
                    best
                }
            })
    }
}

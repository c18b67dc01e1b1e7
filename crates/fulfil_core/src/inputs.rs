//! Operational inputs and their domain validation.

use serde::{Deserialize, Serialize};

use crate::error::{CostError, CostResult};

/// One of the six operational input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    StorageVolume,
    MonthlyOrders,
    AvgOrderValue,
    AvgProductsPerOrder,
    AvgProductWeight,
    ReturnRate,
}

impl InputField {
    /// All fields, in the order the calculator presents them.
    pub const ALL: [InputField; 6] = [
        InputField::StorageVolume,
        InputField::MonthlyOrders,
        InputField::AvgOrderValue,
        InputField::AvgProductsPerOrder,
        InputField::AvgProductWeight,
        InputField::ReturnRate,
    ];

    /// Stable machine name (matches the serialized field name).
    pub fn name(&self) -> &'static str {
        match self {
            InputField::StorageVolume => "storageVolume",
            InputField::MonthlyOrders => "monthlyOrders",
            InputField::AvgOrderValue => "avgOrderValue",
            InputField::AvgProductsPerOrder => "avgProductsPerOrder",
            InputField::AvgProductWeight => "avgProductWeight",
            InputField::ReturnRate => "returnRate",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            InputField::StorageVolume => "Storage Volume",
            InputField::MonthlyOrders => "Monthly Orders",
            InputField::AvgOrderValue => "Average Order Value",
            InputField::AvgProductsPerOrder => "Average Products per Order",
            InputField::AvgProductWeight => "Average Product Weight",
            InputField::ReturnRate => "Return Rate",
        }
    }

    /// Unit of measurement, if any.
    pub fn unit(&self) -> Option<&'static str> {
        match self {
            InputField::StorageVolume => Some("m³"),
            InputField::MonthlyOrders => Some("orders/month"),
            InputField::AvgOrderValue => Some("currency"),
            InputField::AvgProductsPerOrder => Some("items"),
            InputField::AvgProductWeight => Some("kg"),
            InputField::ReturnRate => Some("%"),
        }
    }
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single input that falls outside its allowed domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputViolation {
    pub field: InputField,
    pub value: f64,
    pub message: String,
}

impl InputViolation {
    pub fn new(field: InputField, value: f64, message: impl Into<String>) -> Self {
        Self {
            field,
            value,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for InputViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {} ({})", self.field, self.value, self.message)
    }
}

/// Snapshot of the operational parameters for one month.
///
/// The engine never mutates a snapshot; adjusting a field produces a new value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalInputs {
    /// Warehouse storage footprint in cubic meters
    pub storage_volume: f64,
    /// Orders shipped per month
    pub monthly_orders: u64,
    /// Average revenue per order
    pub avg_order_value: f64,
    /// Average number of items per order (may be fractional)
    pub avg_products_per_order: f64,
    /// Average weight of a single item in kilograms
    pub avg_product_weight: f64,
    /// Share of items returned, in percent
    pub return_rate: f64,
}

impl Default for OperationalInputs {
    fn default() -> Self {
        Self {
            storage_volume: 100.0,
            monthly_orders: 500,
            avg_order_value: 1000.0,
            avg_products_per_order: 2.0,
            avg_product_weight: 0.5,
            return_rate: 5.0,
        }
    }
}

impl OperationalInputs {
    pub fn with_storage_volume(mut self, cubic_meters: f64) -> Self {
        self.storage_volume = cubic_meters;
        self
    }

    pub fn with_monthly_orders(mut self, orders: u64) -> Self {
        self.monthly_orders = orders;
        self
    }

    pub fn with_avg_order_value(mut self, value: f64) -> Self {
        self.avg_order_value = value;
        self
    }

    pub fn with_avg_products_per_order(mut self, products: f64) -> Self {
        self.avg_products_per_order = products;
        self
    }

    pub fn with_avg_product_weight(mut self, kilograms: f64) -> Self {
        self.avg_product_weight = kilograms;
        self
    }

    pub fn with_return_rate(mut self, percent: f64) -> Self {
        self.return_rate = percent;
        self
    }

    /// Read a field as a real number.
    pub fn value(&self, field: InputField) -> f64 {
        match field {
            InputField::StorageVolume => self.storage_volume,
            InputField::MonthlyOrders => self.monthly_orders as f64,
            InputField::AvgOrderValue => self.avg_order_value,
            InputField::AvgProductsPerOrder => self.avg_products_per_order,
            InputField::AvgProductWeight => self.avg_product_weight,
            InputField::ReturnRate => self.return_rate,
        }
    }

    /// Collect every domain violation in this snapshot.
    pub fn validate(&self) -> Vec<InputViolation> {
        let mut violations = Vec::new();

        for field in InputField::ALL {
            let value = self.value(field);
            let problem = match field {
                InputField::MonthlyOrders if self.monthly_orders == 0 => Some("must be at least 1"),
                InputField::MonthlyOrders => None,
                InputField::ReturnRate => check_percent(value),
                _ => check_positive(value),
            };

            if let Some(message) = problem {
                violations.push(InputViolation::new(field, value, message));
            }
        }

        violations
    }

    /// Fail with [`CostError::InvalidInput`] if any field is outside its domain.
    pub fn ensure_valid(&self) -> CostResult<()> {
        let violations = self.validate();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(CostError::InvalidInput { violations })
        }
    }

    /// Total items handled per month.
    pub fn monthly_items(&self) -> f64 {
        self.avg_products_per_order * self.monthly_orders as f64
    }
}

fn check_positive(value: f64) -> Option<&'static str> {
    if !value.is_finite() {
        Some("must be a finite number")
    } else if value <= 0.0 {
        Some("must be greater than zero")
    } else {
        None
    }
}

fn check_percent(value: f64) -> Option<&'static str> {
    if !value.is_finite() {
        Some("must be a finite number")
    } else if !(0.0..=100.0).contains(&value) {
        Some("must be between 0 and 100")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inputs_are_valid() {
        let inputs = OperationalInputs::default();
        assert!(inputs.validate().is_empty());
        assert!(inputs.ensure_valid().is_ok());
    }

    #[test]
    fn test_zero_orders_rejected() {
        let inputs = OperationalInputs::default().with_monthly_orders(0);
        let violations = inputs.validate();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, InputField::MonthlyOrders);
    }

    #[test]
    fn test_collects_all_violations() {
        let inputs = OperationalInputs::default()
            .with_storage_volume(0.0)
            .with_avg_order_value(-10.0)
            .with_avg_product_weight(f64::NAN)
            .with_return_rate(101.0);

        let fields: Vec<_> = inputs.validate().into_iter().map(|v| v.field).collect();
        assert_eq!(
            fields,
            vec![
                InputField::StorageVolume,
                InputField::AvgOrderValue,
                InputField::AvgProductWeight,
                InputField::ReturnRate,
            ]
        );
    }

    #[test]
    fn test_return_rate_bounds_inclusive() {
        assert!(OperationalInputs::default().with_return_rate(0.0).validate().is_empty());
        assert!(OperationalInputs::default().with_return_rate(100.0).validate().is_empty());
        assert!(!OperationalInputs::default().with_return_rate(-0.1).validate().is_empty());
    }

    #[test]
    fn test_infinite_values_rejected() {
        let inputs = OperationalInputs::default().with_avg_products_per_order(f64::INFINITY);
        let err = inputs.ensure_valid().unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_fractional_values_allowed() {
        let inputs = OperationalInputs::default()
            .with_avg_products_per_order(1.7)
            .with_storage_volume(12.25)
            .with_avg_product_weight(0.05);
        assert!(inputs.validate().is_empty());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(OperationalInputs::default()).unwrap();
        assert_eq!(json["monthlyOrders"], 500);
        assert_eq!(json["avgProductWeight"], 0.5);
    }
}

//! Input Controller ranges.
//!
//! These are the adjustable ranges an interactive front end offers for each
//! field. They are a UI policy only: values inside the engine's domain but
//! outside these ranges are still computable, and the engine re-validates
//! whatever it receives.

use serde::{Deserialize, Serialize};

use crate::inputs::{InputField, InputViolation, OperationalInputs};

/// Range and step for one adjustable field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl FieldBounds {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp into range. NaN passes through untouched so the engine can reject it.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            value
        } else {
            value.max(self.min).min(self.max)
        }
    }
}

/// Ranges for all six operational inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputBounds {
    pub storage_volume: FieldBounds,
    pub monthly_orders: FieldBounds,
    pub avg_order_value: FieldBounds,
    pub avg_products_per_order: FieldBounds,
    pub avg_product_weight: FieldBounds,
    pub return_rate: FieldBounds,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            storage_volume: FieldBounds::new(1.0, 1000.0, 1.0),
            monthly_orders: FieldBounds::new(10.0, 10_000.0, 10.0),
            avg_order_value: FieldBounds::new(100.0, 10_000.0, 100.0),
            avg_products_per_order: FieldBounds::new(1.0, 20.0, 1.0),
            avg_product_weight: FieldBounds::new(0.1, 10.0, 0.1),
            return_rate: FieldBounds::new(0.0, 30.0, 0.5),
        }
    }
}

impl InputBounds {
    pub fn get(&self, field: InputField) -> &FieldBounds {
        match field {
            InputField::StorageVolume => &self.storage_volume,
            InputField::MonthlyOrders => &self.monthly_orders,
            InputField::AvgOrderValue => &self.avg_order_value,
            InputField::AvgProductsPerOrder => &self.avg_products_per_order,
            InputField::AvgProductWeight => &self.avg_product_weight,
            InputField::ReturnRate => &self.return_rate,
        }
    }

    /// Report every field that sits outside its adjustable range.
    pub fn check(&self, inputs: &OperationalInputs) -> Vec<InputViolation> {
        InputField::ALL
            .into_iter()
            .filter_map(|field| {
                let bounds = self.get(field);
                let value = inputs.value(field);
                (!bounds.contains(value)).then(|| {
                    InputViolation::new(
                        field,
                        value,
                        format!("outside adjustable range {}..={}", bounds.min, bounds.max),
                    )
                })
            })
            .collect()
    }

    /// Return a copy with every field clamped into range.
    pub fn clamp(&self, inputs: &OperationalInputs) -> OperationalInputs {
        let orders = self.monthly_orders.clamp(inputs.monthly_orders as f64).round() as u64;

        OperationalInputs {
            storage_volume: self.storage_volume.clamp(inputs.storage_volume),
            monthly_orders: orders,
            avg_order_value: self.avg_order_value.clamp(inputs.avg_order_value),
            avg_products_per_order: self
                .avg_products_per_order
                .clamp(inputs.avg_products_per_order),
            avg_product_weight: self.avg_product_weight.clamp(inputs.avg_product_weight),
            return_rate: self.return_rate.clamp(inputs.return_rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fit_bounds() {
        let bounds = InputBounds::default();
        assert!(bounds.check(&OperationalInputs::default()).is_empty());
    }

    #[test]
    fn test_clamp_does_not_mutate_source() {
        let bounds = InputBounds::default();
        let inputs = OperationalInputs::default()
            .with_monthly_orders(50_000)
            .with_return_rate(45.0);

        let clamped = bounds.clamp(&inputs);
        assert_eq!(clamped.monthly_orders, 10_000);
        assert_eq!(clamped.return_rate, 30.0);
        assert_eq!(inputs.monthly_orders, 50_000);
        assert_eq!(inputs.return_rate, 45.0);
    }

    #[test]
    fn test_check_reports_out_of_range_fields() {
        let bounds = InputBounds::default();
        let inputs = OperationalInputs::default()
            .with_storage_volume(0.5)
            .with_avg_product_weight(12.0);

        let fields: Vec<_> = bounds.check(&inputs).into_iter().map(|v| v.field).collect();
        assert_eq!(
            fields,
            vec![InputField::StorageVolume, InputField::AvgProductWeight]
        );
    }

    #[test]
    fn test_clamp_keeps_nan_for_engine() {
        let bounds = InputBounds::default();
        let inputs = OperationalInputs::default().with_avg_order_value(f64::NAN);
        let clamped = bounds.clamp(&inputs);
        assert!(clamped.avg_order_value.is_nan());
        assert!(!clamped.validate().is_empty());
    }

    #[test]
    fn test_zero_orders_clamped_to_minimum() {
        let bounds = InputBounds::default();
        let clamped = bounds.clamp(&OperationalInputs::default().with_monthly_orders(0));
        assert_eq!(clamped.monthly_orders, 10);
    }
}

//! Timestamped cost report document.
//!
//! A report wraps a finished analysis with the inputs and rates it came from.
//! The timestamp and id are added here, downstream of the engine.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fulfil_core::{CostAnalysis, CostRates, InputField, OperationalInputs};

use crate::chart::{breakdown_series, comparison_series, revenue_caption, ChartSlice};
use crate::currency::{format_currency, format_percent, Currency};
use crate::error::{ReportError, ReportResult};
use crate::summary::summary_cards;

pub const REPORT_TITLE: &str = "Fulfillment Cost Analysis";

/// Output formats for a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            other => Err(ReportError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostReport {
    pub id: Uuid,
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub currency: Currency,
    pub inputs: OperationalInputs,
    pub rates: CostRates,
    pub analysis: CostAnalysis,
}

impl CostReport {
    pub fn new(
        inputs: OperationalInputs,
        rates: CostRates,
        analysis: CostAnalysis,
        currency: Currency,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: REPORT_TITLE.to_string(),
            generated_at: Utc::now(),
            currency,
            inputs,
            rates,
            analysis,
        }
    }

    /// Pin the timestamp, e.g. for reproducible output.
    pub fn with_timestamp(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    pub fn render(&self, format: ReportFormat) -> ReportResult<String> {
        match format {
            ReportFormat::Text => Ok(self.to_text()),
            ReportFormat::Markdown => Ok(self.to_markdown()),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn money(&self, amount: f64) -> String {
        format_currency(amount, self.currency, true)
    }

    fn input_value(&self, field: InputField) -> String {
        let value = self.inputs.value(field);
        match field {
            InputField::AvgOrderValue => self.money(value),
            InputField::ReturnRate => format_percent(value, 1),
            _ => match field.unit() {
                Some(unit) => format!("{value} {unit}"),
                None => value.to_string(),
            },
        }
    }

    pub fn to_text(&self) -> String {
        let metrics = &self.analysis.metrics;
        let mut report = String::new();

        report.push_str(&format!("{}\n", self.title));
        report.push_str(&format!("{}\n", "=".repeat(self.title.chars().count())));
        report.push_str(&format!(
            "Generated on: {}\n",
            self.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        report.push_str(&format!("Currency: {}\n\n", self.currency.code()));

        report.push_str("Inputs\n");
        for field in InputField::ALL {
            report.push_str(&format!(
                "  {:<28} {}\n",
                field.label(),
                self.input_value(field)
            ));
        }
        report.push('\n');

        for card in summary_cards(metrics, self.currency) {
            report.push_str(&format!(
                "{:<16} {:>18}  {}\n",
                card.title, card.value, card.description
            ));
        }
        report.push('\n');

        report.push_str("Cost Breakdown\n");
        for slice in breakdown_series(&self.analysis.breakdown) {
            report.push_str(&format!(
                "  {:<12} {:>18} {:>5}  {}\n",
                slice.label,
                self.money(slice.amount),
                share_cell(&slice),
                slice.category.driver()
            ));
        }
        report.push('\n');

        report.push_str("Revenue vs. Fulfillment Cost\n");
        for bar in comparison_series(metrics) {
            report.push_str(&format!(
                "  {:<18} {:>18}\n",
                bar.label,
                self.money(bar.value)
            ));
        }
        report.push_str(&format!("  {}\n", revenue_caption(metrics)));

        report
    }

    pub fn to_markdown(&self) -> String {
        let metrics = &self.analysis.metrics;
        let mut report = String::new();

        report.push_str(&format!("# {}\n\n", self.title));
        report.push_str(&format!(
            "_Generated on {} (report {}), amounts in {}_\n\n",
            self.generated_at.format("%Y-%m-%d %H:%M UTC"),
            self.id,
            self.currency.code()
        ));

        report.push_str("## Summary\n\n");
        report.push_str("| Metric | Value | |\n|---|---:|---|\n");
        for card in summary_cards(metrics, self.currency) {
            report.push_str(&format!(
                "| {} | {} | {} |\n",
                card.title, card.value, card.description
            ));
        }

        report.push_str("\n## Cost Breakdown\n\n");
        report.push_str("| Category | Monthly | Share |\n|---|---:|---:|\n");
        for slice in breakdown_series(&self.analysis.breakdown) {
            report.push_str(&format!(
                "| {} | {} | {} |\n",
                slice.label,
                self.money(slice.amount),
                share_cell(&slice)
            ));
        }

        report.push_str("\n## Revenue vs. Fulfillment Cost\n\n");
        for bar in comparison_series(metrics) {
            report.push_str(&format!("- **{}**: {}\n", bar.label, self.money(bar.value)));
        }
        report.push_str(&format!("\n{}\n", revenue_caption(metrics)));

        report.push_str("\n## Inputs\n\n");
        for field in InputField::ALL {
            report.push_str(&format!("- {}: {}\n", field.label(), self.input_value(field)));
        }

        report
    }
}

fn share_cell(slice: &ChartSlice) -> String {
    match slice.rounded_share() {
        Some(share) => format!("{share}%"),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use fulfil_core::CostEngine;

    fn sample_report() -> CostReport {
        let inputs = OperationalInputs::default();
        let engine = CostEngine::default();
        let analysis = engine.compute(&inputs).unwrap();
        CostReport::new(inputs, engine.rates().clone(), analysis, Currency::Inr)
            .with_timestamp(Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap())
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("md".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!("pdf".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_text_report() {
        let text = sample_report().render(ReportFormat::Text).unwrap();
        assert!(text.starts_with(REPORT_TITLE));
        assert!(text.contains("Generated on: 2024-03-01 09:30 UTC"));
        assert!(text.contains("Currency: INR"));
        assert!(text.contains("per order plus per kilogram shipped"));
        assert!(text.contains("₹227.50"));
        assert!(text.contains("Shipping"));
        assert!(text.contains("22.8% of revenue"));
    }

    #[test]
    fn test_markdown_report() {
        let md = sample_report().render(ReportFormat::Markdown).unwrap();
        assert!(md.starts_with("# Fulfillment Cost Analysis"));
        assert!(md.contains("| Storage | ₹50,000.00 | 44% |"));
        assert!(md.contains("amounts in INR"));
        assert!(md.contains("- Return Rate: 5.0%"));
    }

    #[test]
    fn test_json_report_round_trips_analysis() {
        let report = sample_report();
        let json = report.render(ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["currency"], "INR");
        assert_eq!(value["analysis"]["breakdown"]["packing"], 7500.0);
        assert_eq!(value["inputs"]["monthlyOrders"], 500);
        assert_eq!(value["rates"]["packing_unit_cost"], 15.0);
    }

    #[test]
    fn test_reports_get_distinct_ids() {
        assert_ne!(sample_report().id, sample_report().id);
    }
}

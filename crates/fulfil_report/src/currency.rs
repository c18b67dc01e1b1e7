//! Currency display.
//!
//! The engine emits raw numbers; symbols, grouping and rounding live here.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Supported currencies for cost display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Inr,
    Usd,
    Eur,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    /// Digits per group left of the first thousands separator.
    /// Indian numbering groups lakhs and crores in twos: 12,34,567.
    fn group_size(&self) -> usize {
        match self {
            Currency::Inr => 2,
            Currency::Usd | Currency::Eur => 3,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Inr => write!(f, "₹"),
            Currency::Usd => write!(f, "$"),
            Currency::Eur => write!(f, "€"),
        }
    }
}

impl FromStr for Currency {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "INR" | "₹" => Ok(Currency::Inr),
            "USD" | "$" => Ok(Currency::Usd),
            "EUR" | "€" => Ok(Currency::Eur),
            other => Err(ReportError::UnknownCurrency(other.to_string())),
        }
    }
}

/// Format an amount with symbol and grouping.
///
/// `decimals = false` rounds to whole units, as used for chart axis ticks.
pub fn format_currency(amount: f64, currency: Currency, decimals: bool) -> String {
    if !amount.is_finite() {
        return "n/a".to_string();
    }

    let places = if decimals { 2 } else { 0 };
    let digits = format!("{:.*}", places, amount.abs());
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let is_zero = digits.chars().all(|c| c == '0' || c == '.');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    let mut out = format!("{sign}{currency}{}", group_digits(integer, currency.group_size()));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Format a percentage with a fixed number of decimal places.
pub fn format_percent(value: f64, places: usize) -> String {
    format!("{:.*}%", places, value)
}

fn group_digits(integer: &str, group: usize) -> String {
    if integer.len() <= 3 {
        return integer.to_string();
    }

    let (head, tail) = integer.split_at(integer.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(group);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_currency(113_750.0, Currency::Inr, true), "₹1,13,750.00");
        assert_eq!(format_currency(1_365_000.0, Currency::Inr, false), "₹13,65,000");
        assert_eq!(format_currency(227.5, Currency::Inr, true), "₹227.50");
    }

    #[test]
    fn test_western_grouping() {
        assert_eq!(format_currency(1_365_000.0, Currency::Usd, true), "$1,365,000.00");
        assert_eq!(format_currency(1000.0, Currency::Eur, false), "€1,000");
        assert_eq!(format_currency(999.0, Currency::Usd, false), "$999");
    }

    #[test]
    fn test_negative_and_zero() {
        assert_eq!(format_currency(-386_250.0, Currency::Inr, true), "-₹3,86,250.00");
        assert_eq!(format_currency(-0.001, Currency::Usd, true), "$0.00");
        assert_eq!(format_currency(0.0, Currency::Usd, false), "$0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_currency(f64::NAN, Currency::Inr, true), "n/a");
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!("INR".parse::<Currency>().unwrap(), Currency::Inr);
        assert!("GBP".parse::<Currency>().is_err());
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(22.75, 1), "22.8%");
        assert_eq!(format_percent(4.3956, 0), "4%");
    }
}

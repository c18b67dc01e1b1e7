//! Unit cost rates used by the engine formulas.
//!
//! Rates can be loaded from a YAML, TOML or JSON file and overridden through
//! `FULFIL_*` environment variables. Missing keys fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CostError, CostResult};

/// Prefix for environment overrides, e.g. `FULFIL_PACKING_UNIT_COST`.
pub const ENV_PREFIX: &str = "FULFIL_";

/// Tunable unit costs, one per real-world cost driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostRates {
    /// Cost to receive one item into the warehouse
    pub receiving_unit_cost: f64,
    /// Monthly cost per cubic meter of storage
    pub storage_unit_cost: f64,
    /// Cost to pick one item
    pub picking_unit_cost: f64,
    /// Cost to pack one order
    pub packing_unit_cost: f64,
    /// Flat shipping cost per order
    pub shipping_base_cost: f64,
    /// Shipping cost per kilogram shipped
    pub shipping_per_kg_cost: f64,
    /// Cost to process one returned item
    pub return_unit_cost: f64,
}

impl Default for CostRates {
    fn default() -> Self {
        Self {
            receiving_unit_cost: 5.0,
            storage_unit_cost: 500.0,
            picking_unit_cost: 10.0,
            packing_unit_cost: 15.0,
            shipping_base_cost: 70.0,
            shipping_per_kg_cost: 20.0,
            return_unit_cost: 25.0,
        }
    }
}

/// Supported rates file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatesFormat {
    Yaml,
    Toml,
    Json,
}

impl RatesFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> CostResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(RatesFormat::Yaml),
            Some("toml") => Ok(RatesFormat::Toml),
            Some("json") => Ok(RatesFormat::Json),
            _ => Err(CostError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl CostRates {
    /// Named rate values, keyed by their config name.
    pub fn entries(&self) -> [(&'static str, f64); 7] {
        [
            ("receiving_unit_cost", self.receiving_unit_cost),
            ("storage_unit_cost", self.storage_unit_cost),
            ("picking_unit_cost", self.picking_unit_cost),
            ("packing_unit_cost", self.packing_unit_cost),
            ("shipping_base_cost", self.shipping_base_cost),
            ("shipping_per_kg_cost", self.shipping_per_kg_cost),
            ("return_unit_cost", self.return_unit_cost),
        ]
    }

    fn entry_mut(&mut self, key: &str) -> Option<&mut f64> {
        match key {
            "receiving_unit_cost" => Some(&mut self.receiving_unit_cost),
            "storage_unit_cost" => Some(&mut self.storage_unit_cost),
            "picking_unit_cost" => Some(&mut self.picking_unit_cost),
            "packing_unit_cost" => Some(&mut self.packing_unit_cost),
            "shipping_base_cost" => Some(&mut self.shipping_base_cost),
            "shipping_per_kg_cost" => Some(&mut self.shipping_per_kg_cost),
            "return_unit_cost" => Some(&mut self.return_unit_cost),
            _ => None,
        }
    }

    /// Reject negative or non-finite rates.
    pub fn validate(&self) -> CostResult<()> {
        let bad: Vec<String> = self
            .entries()
            .iter()
            .filter(|(_, value)| !value.is_finite() || *value < 0.0)
            .map(|(name, value)| format!("{name} = {value}"))
            .collect();

        if bad.is_empty() {
            Ok(())
        } else {
            Err(CostError::InvalidRates(format!(
                "rates must be finite and non-negative: {}",
                bad.join(", ")
            )))
        }
    }

    /// Parse rates from a string in the given format.
    pub fn parse(content: &str, format: RatesFormat) -> CostResult<Self> {
        let rates: Self = match format {
            RatesFormat::Yaml => serde_yaml::from_str(content)?,
            RatesFormat::Toml => toml::from_str(content)?,
            RatesFormat::Json => serde_json::from_str(content)?,
        };
        Ok(rates)
    }

    /// Load rates from a file, picking the format by extension.
    pub fn from_file(path: impl AsRef<Path>) -> CostResult<Self> {
        let path = path.as_ref();
        let format = RatesFormat::from_path(path)?;
        debug!("Loading cost rates from {:?} as {:?}", path, format);

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, format)
    }

    /// Apply `FULFIL_*` overrides from an arbitrary set of variables.
    pub fn apply_overrides<I, K, V>(mut self, vars: I) -> CostResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in vars {
            let Some(name) = key.as_ref().strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let name = name.to_lowercase();
            let Some(slot) = self.entry_mut(&name) else {
                continue;
            };

            let raw = value.as_ref().trim();
            let parsed = raw.parse::<f64>().map_err(|_| {
                CostError::InvalidRates(format!(
                    "{}{} is not a number: {:?}",
                    ENV_PREFIX,
                    name.to_uppercase(),
                    raw
                ))
            })?;

            debug!("Overriding {} with {}", name, parsed);
            *slot = parsed;
        }

        Ok(self)
    }

    /// Apply overrides from the process environment.
    ///
    /// Only the seven known keys are read, so unrelated variables never matter.
    pub fn with_env_overrides(self) -> CostResult<Self> {
        let mut vars = Vec::new();
        for (name, _) in self.entries() {
            let key = format!("{}{}", ENV_PREFIX, name.to_uppercase());
            match std::env::var(&key) {
                Ok(value) => vars.push((key, value)),
                Err(std::env::VarError::NotPresent) => {}
                Err(std::env::VarError::NotUnicode(_)) => {
                    return Err(CostError::InvalidRates(format!("{key} is not valid UTF-8")));
                }
            }
        }

        self.apply_overrides(vars)
    }

    /// Resolve effective rates: file (or defaults), then environment, then validation.
    pub fn load(path: Option<&Path>) -> CostResult<Self> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        let rates = base.with_env_overrides()?;
        rates.validate()?;
        Ok(rates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates_valid() {
        assert!(CostRates::default().validate().is_ok());
    }

    #[test]
    fn test_negative_rate_rejected() {
        let rates = CostRates {
            picking_unit_cost: -1.0,
            ..Default::default()
        };
        let err = rates.validate().unwrap_err();
        assert!(err.to_string().contains("picking_unit_cost"));
    }

    #[test]
    fn test_zero_rates_allowed() {
        let rates = CostRates {
            return_unit_cost: 0.0,
            storage_unit_cost: 0.0,
            ..Default::default()
        };
        assert!(rates.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let rates = CostRates::parse("packing_unit_cost: 22.5\n", RatesFormat::Yaml).unwrap();
        assert_eq!(rates.packing_unit_cost, 22.5);
        assert_eq!(rates.shipping_base_cost, 70.0);
    }

    #[test]
    fn test_toml_and_json_parse() {
        let toml = CostRates::parse("shipping_per_kg_cost = 18.0", RatesFormat::Toml).unwrap();
        assert_eq!(toml.shipping_per_kg_cost, 18.0);

        let json = CostRates::parse(r#"{"receiving_unit_cost": 4}"#, RatesFormat::Json).unwrap();
        assert_eq!(json.receiving_unit_cost, 4.0);
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(RatesFormat::from_path(Path::new("r.YML")).unwrap(), RatesFormat::Yaml);
        assert_eq!(RatesFormat::from_path(Path::new("r.toml")).unwrap(), RatesFormat::Toml);
        assert!(RatesFormat::from_path(Path::new("rates.ini")).is_err());
    }

    #[test]
    fn test_overrides() {
        let rates = CostRates::default()
            .apply_overrides([
                ("FULFIL_PACKING_UNIT_COST", "12"),
                ("FULFIL_UNKNOWN", "3"),
                ("PATH", "/usr/bin"),
            ])
            .unwrap();
        assert_eq!(rates.packing_unit_cost, 12.0);
        assert_eq!(rates.receiving_unit_cost, 5.0);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_neighbour_variable_is_ignored() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        std::env::set_var("FULFIL_RATES_TEST_NOT_UTF8", OsStr::from_bytes(b"\xff\xfe"));
        let result = CostRates::default().with_env_overrides();
        std::env::remove_var("FULFIL_RATES_TEST_NOT_UTF8");

        assert!(result.is_ok());
    }

    #[test]
    fn test_unparsable_override_is_error() {
        let err = CostRates::default()
            .apply_overrides([("FULFIL_RETURN_UNIT_COST", "lots")])
            .unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("FULFIL_RETURN_UNIT_COST"));
    }
}

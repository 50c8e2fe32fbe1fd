//! Configuration types for the calculator service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Experiment;

/// Statutory rates used by the 13th salary and employee cost formulas.
///
/// The default values are the ones the calculators were published with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatutoryRates {
    /// INSS withholding rate applied to the 13th salary.
    pub inss_rate: Decimal,
    /// Monthly INSS ceiling; pro-rated by months worked.
    pub inss_monthly_ceiling: Decimal,
    /// FGTS deposit rate over the base salary.
    pub fgts_rate: Decimal,
    /// Flat rate approximating the employer's social charges.
    pub payroll_charges_rate: Decimal,
}

impl Default for StatutoryRates {
    fn default() -> Self {
        Self {
            inss_rate: Decimal::new(11, 2),
            inss_monthly_ceiling: Decimal::new(76078, 2),
            fgts_rate: Decimal::new(8, 2),
            payroll_charges_rate: Decimal::new(27, 2),
        }
    }
}

/// Rates file structure (`rates.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct RatesFile {
    /// The statutory rates.
    pub rates: StatutoryRates,
}

/// Admin access configuration (`access.yaml`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessConfig {
    /// Corporate email domain whose users may enter the admin area.
    pub admin_email_domain: String,
}

/// The complete service configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct AppConfig {
    rates: StatutoryRates,
    access: AccessConfig,
    experiments: HashMap<String, Experiment>,
}

impl AppConfig {
    /// Creates a new AppConfig from its component parts.
    ///
    /// Experiments are keyed by name; with repeated names the last one wins.
    /// [`super::ConfigLoader::load`] rejects repeats before getting here.
    pub fn new(rates: StatutoryRates, access: AccessConfig, experiments: Vec<Experiment>) -> Self {
        let experiments = experiments
            .into_iter()
            .map(|experiment| (experiment.name.clone(), experiment))
            .collect();
        Self {
            rates,
            access,
            experiments,
        }
    }

    /// Returns the statutory rates.
    pub fn rates(&self) -> &StatutoryRates {
        &self.rates
    }

    /// Returns the admin access configuration.
    pub fn access(&self) -> &AccessConfig {
        &self.access
    }

    /// Returns all experiments keyed by name.
    pub fn experiments(&self) -> &HashMap<String, Experiment> {
        &self.experiments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Variant;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_rates_match_published_constants() {
        let rates = StatutoryRates::default();
        assert_eq!(rates.inss_rate, dec("0.11"));
        assert_eq!(rates.inss_monthly_ceiling, dec("760.78"));
        assert_eq!(rates.fgts_rate, dec("0.08"));
        assert_eq!(rates.payroll_charges_rate, dec("0.27"));
    }

    #[test]
    fn test_rates_file_deserializes_from_yaml() {
        let yaml = r#"
rates:
  inssRate: "0.11"
  inssMonthlyCeiling: "760.78"
  fgtsRate: "0.08"
  payrollChargesRate: "0.27"
"#;
        let file: RatesFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.rates, StatutoryRates::default());
    }

    #[test]
    fn test_app_config_indexes_experiments_by_name() {
        let config = AppConfig::new(
            StatutoryRates::default(),
            AccessConfig {
                admin_email_domain: "empresa.com.br".to_string(),
            },
            vec![Experiment {
                name: "cta_text".to_string(),
                variants: vec![Variant {
                    id: "a".to_string(),
                    name: "Calcular".to_string(),
                    weight: 1,
                }],
            }],
        );

        assert!(config.experiments().contains_key("cta_text"));
        assert_eq!(config.access().admin_email_domain, "empresa.com.br");
    }
}

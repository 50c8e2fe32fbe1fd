//! A/B experiment definitions.

use serde::{Deserialize, Serialize};

/// One arm of an A/B experiment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Stable identifier recorded with analytics events.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Relative weight; a variant with weight 0 is never drawn unless every
    /// weight is 0.
    #[serde(default = "default_weight")]
    pub weight: u32,
}

fn default_weight() -> u32 {
    1
}

/// An experiment and its variants.
///
/// # Example
///
/// ```
/// use clt_calc::models::Experiment;
///
/// let yaml = "name: cta_text\nvariants:\n  - id: a\n    name: Calcular\n    weight: 50\n  - id: b\n    name: Ver resultado\n";
/// let experiment: Experiment = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(experiment.variants.len(), 2);
/// assert_eq!(experiment.variants[1].weight, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experiment {
    /// Unique experiment name.
    pub name: String,
    /// The variants, in configuration order.
    #[serde(default)]
    pub variants: Vec<Variant>,
}

//! Persisted saved-calculation records.
//!
//! A [`SavedCalculationRecord`] is what the hosted store keeps for a user's
//! "saved calculations" area. Older records only carry `outputs` as the
//! formatted label/value strings; newer ones also carry the raw numeric
//! output so nothing has to be parsed back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::{CalculationOutput, CalculatorKind};

/// A calculation saved by an end user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCalculationRecord {
    /// Record identifier.
    pub id: Uuid,
    /// The persisted calculator tag. Kept as a string since stored data may
    /// hold tags this build does not know.
    pub calculator_kind: String,
    /// Optional user-given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Input values as originally submitted.
    #[serde(default)]
    pub inputs: Map<String, Value>,
    /// Formatted outputs keyed by row label.
    #[serde(default)]
    pub outputs: Map<String, Value>,
    /// Raw numeric output, present on records written by this service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_output: Option<CalculationOutput>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl SavedCalculationRecord {
    /// Returns the calculator kind, or `None` for an unknown tag.
    pub fn kind(&self) -> Option<CalculatorKind> {
        CalculatorKind::from_tag(&self.calculator_kind)
    }
}

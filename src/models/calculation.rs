//! Tagged input/output unions over every calculator.
//!
//! These carry the [`CalculatorKind`] in the type so dispatch is an
//! exhaustive `match` instead of a string switch.

use serde::{Deserialize, Serialize};

use super::{
    CalculatorKind, EmployeeCostInput, EmployeeCostOutput, ThirteenthSalaryInput,
    ThirteenthSalaryOutput, VacationInput, VacationOutput,
};

/// An input record for one of the calculators.
///
/// Serialized as `{"kind": "...", "input": {...}}`.
///
/// # Example
///
/// ```
/// use clt_calc::models::{CalculationInput, CalculatorKind};
///
/// let json = r#"{"kind": "thirteenthSalary", "input": {"monthlySalary": "3000", "monthsWorked": 12}}"#;
/// let input: CalculationInput = serde_json::from_str(json).unwrap();
/// assert_eq!(input.kind(), CalculatorKind::ThirteenthSalary);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "input", rename_all = "camelCase")]
pub enum CalculationInput {
    /// Vacation calculator input.
    Vacation(VacationInput),
    /// 13th salary calculator input.
    ThirteenthSalary(ThirteenthSalaryInput),
    /// Employee cost calculator input.
    EmployeeCost(EmployeeCostInput),
}

impl CalculationInput {
    /// Returns which calculator this input belongs to.
    pub fn kind(&self) -> CalculatorKind {
        match self {
            CalculationInput::Vacation(_) => CalculatorKind::Vacation,
            CalculationInput::ThirteenthSalary(_) => CalculatorKind::ThirteenthSalary,
            CalculationInput::EmployeeCost(_) => CalculatorKind::EmployeeCost,
        }
    }
}

/// An output record from one of the calculators.
///
/// Serialized as `{"kind": "...", "output": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "output", rename_all = "camelCase")]
pub enum CalculationOutput {
    /// Vacation calculator output.
    Vacation(VacationOutput),
    /// 13th salary calculator output.
    ThirteenthSalary(ThirteenthSalaryOutput),
    /// Employee cost calculator output.
    EmployeeCost(EmployeeCostOutput),
}

impl CalculationOutput {
    /// Returns which calculator produced this output.
    pub fn kind(&self) -> CalculatorKind {
        match self {
            CalculationOutput::Vacation(_) => CalculatorKind::Vacation,
            CalculationOutput::ThirteenthSalary(_) => CalculatorKind::ThirteenthSalary,
            CalculationOutput::EmployeeCost(_) => CalculatorKind::EmployeeCost,
        }
    }
}

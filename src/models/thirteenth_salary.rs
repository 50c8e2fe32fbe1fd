//! 13th salary (décimo terceiro) input and output records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Input for the 13th salary calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThirteenthSalaryInput {
    /// Gross monthly salary.
    pub monthly_salary: Decimal,
    /// Months worked in the year (1..=12).
    pub months_worked: u32,
}

/// Result of the 13th salary calculation.
///
/// The two installments always add up to `proportional_value` exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThirteenthSalaryOutput {
    /// Salary prorated by months worked.
    pub proportional_value: Decimal,
    /// Half of the proportional value, due by November 30.
    pub first_installment: Decimal,
    /// The remainder, due by December 20.
    pub second_installment: Decimal,
    /// Estimated INSS withholding, capped by the pro-rated ceiling.
    pub social_security_withholding: Decimal,
    /// Proportional value minus withholding.
    pub net_value: Decimal,
    /// Echo of the input months worked.
    pub months_worked: u32,
}

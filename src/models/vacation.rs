//! Vacation (férias) input and output records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Input for the vacation calculator.
///
/// Accepted ranges: `monthly_salary >= 0.01`, `months_worked` in 1..=12,
/// `vacation_days` in 10..=30, `advance_amount >= 0`. The ranges are checked
/// by [`crate::calculation::validate_vacation`], not by the formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationInput {
    /// Gross monthly salary.
    pub monthly_salary: Decimal,
    /// Months worked in the accrual period.
    pub months_worked: u32,
    /// Vacation days being taken.
    pub vacation_days: u32,
    /// Whether an advance already paid should be deducted.
    #[serde(default)]
    pub deduct_advance: bool,
    /// The advance amount. Only meaningful when `deduct_advance` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advance_amount: Option<Decimal>,
}

/// Result of the vacation calculation.
///
/// `gross_value == proportional_value + one_third_bonus` and
/// `net_value == gross_value - deduction`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationOutput {
    /// Salary prorated by months worked.
    pub proportional_value: Decimal,
    /// Constitutional one-third bonus over the proportional value.
    pub one_third_bonus: Decimal,
    /// Proportional value plus bonus.
    pub gross_value: Decimal,
    /// Advance deducted from the gross value.
    pub deduction: Decimal,
    /// Amount actually received.
    pub net_value: Decimal,
    /// Echo of the input vacation days.
    pub vacation_days: u32,
    /// Echo of the input months worked.
    pub months_worked: u32,
}

//! Vacation pay (férias) calculation.
//!
//! Vacation pay is the monthly salary prorated by months worked, plus the
//! constitutional one-third bonus, minus any advance already paid.

use rust_decimal::Decimal;

use crate::models::{VacationInput, VacationOutput};

use super::prorate;

/// Calculates vacation pay.
///
/// - `proportional_value = monthly_salary * months_worked / 12`
/// - `one_third_bonus = proportional_value / 3`
/// - `gross_value = proportional_value + one_third_bonus`
/// - `deduction = advance_amount` when `deduct_advance` is set, otherwise 0
/// - `net_value = gross_value - deduction`
///
/// Inputs are not validated here; out-of-range values flow through the
/// arithmetic unchanged. See [`super::validate_vacation`].
///
/// # Arguments
///
/// * `input` - Salary, months worked, vacation days and the optional advance
///
/// # Returns
///
/// A `VacationOutput` echoing `vacation_days` and `months_worked`. Sums and
/// products saturate at the `Decimal` bounds, so the function never panics.
///
/// # Examples
///
/// ```
/// use clt_calc::calculation::calculate_vacation;
/// use clt_calc::models::VacationInput;
/// use rust_decimal::Decimal;
///
/// let output = calculate_vacation(&VacationInput {
///     monthly_salary: Decimal::from(3000),
///     months_worked: 12,
///     vacation_days: 30,
///     deduct_advance: false,
///     advance_amount: None,
/// });
///
/// assert_eq!(output.proportional_value, Decimal::from(3000));
/// assert_eq!(output.one_third_bonus, Decimal::from(1000));
/// assert_eq!(output.net_value, Decimal::from(4000));
/// ```
pub fn calculate_vacation(input: &VacationInput) -> VacationOutput {
    let proportional_value = prorate(input.monthly_salary, input.months_worked);
    let one_third_bonus = proportional_value / Decimal::from(3);
    let gross_value = proportional_value.saturating_add(one_third_bonus);

    let deduction = match (input.deduct_advance, input.advance_amount) {
        (true, Some(amount)) => amount,
        _ => Decimal::ZERO,
    };

    VacationOutput {
        proportional_value,
        one_third_bonus,
        gross_value,
        deduction,
        net_value: gross_value.saturating_sub(deduction),
        vacation_days: input.vacation_days,
        months_worked: input.months_worked,
    }
}

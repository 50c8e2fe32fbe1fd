//! Calculation logic for the payroll calculators.
//!
//! This module contains the three pure calculators (vacation, 13th salary and
//! employee cost), the validation step that runs before them, and a
//! dispatcher over [`CalculationInput`].

mod employee_cost;
mod thirteenth_salary;
mod vacation;
mod validation;

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::models::{CalculationInput, CalculationOutput};

pub use employee_cost::{
    EMPLOYEE_COST_DISCLAIMER, calculate_employee_cost, calculate_employee_cost_with,
};
pub use thirteenth_salary::{calculate_thirteenth_salary, calculate_thirteenth_salary_with};
pub use vacation::calculate_vacation;
pub use validation::{
    MAX_AMOUNT, validate, validate_employee_cost, validate_thirteenth_salary, validate_vacation,
};

pub(crate) const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Prorates an annual amount by months worked.
///
/// Multiplies before dividing so whole-cent amounts stay exact. The product
/// saturates at `Decimal::MAX`/`Decimal::MIN` instead of overflowing.
pub(crate) fn prorate(amount: Decimal, months: u32) -> Decimal {
    amount.saturating_mul(Decimal::from(months)) / MONTHS_PER_YEAR
}

/// Runs the calculator matching the input with the default rates.
///
/// # Arguments
///
/// * `input` - The tagged calculator input
///
/// # Returns
///
/// The output variant matching the input variant. Never fails; see
/// [`validate`] for the checks that belong before this call.
pub fn calculate(input: &CalculationInput) -> CalculationOutput {
    calculate_with(input, &StatutoryRates::default())
}

/// Runs the calculator matching the input with the given rates.
///
/// # Arguments
///
/// * `input` - The tagged calculator input
/// * `rates` - Statutory rates, usually loaded from `rates.yaml`
///
/// # Returns
///
/// The output variant matching the input variant.
///
/// # Examples
///
/// ```
/// use clt_calc::calculation::calculate_with;
/// use clt_calc::config::StatutoryRates;
/// use clt_calc::models::{CalculationInput, CalculationOutput, ThirteenthSalaryInput};
/// use rust_decimal::Decimal;
///
/// let input = CalculationInput::ThirteenthSalary(ThirteenthSalaryInput {
///     monthly_salary: Decimal::from(3000),
///     months_worked: 12,
/// });
///
/// match calculate_with(&input, &StatutoryRates::default()) {
///     CalculationOutput::ThirteenthSalary(output) => {
///         assert_eq!(output.net_value, Decimal::from(2670));
///     }
///     other => panic!("unexpected output {:?}", other),
/// }
/// ```
pub fn calculate_with(input: &CalculationInput, rates: &StatutoryRates) -> CalculationOutput {
    match input {
        CalculationInput::Vacation(v) => CalculationOutput::Vacation(calculate_vacation(v)),
        CalculationInput::ThirteenthSalary(t) => {
            CalculationOutput::ThirteenthSalary(calculate_thirteenth_salary_with(t, rates))
        }
        CalculationInput::EmployeeCost(e) => {
            CalculationOutput::EmployeeCost(calculate_employee_cost_with(e, rates))
        }
    }
}

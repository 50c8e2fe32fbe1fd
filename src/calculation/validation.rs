//! Input validation run before the calculators.
//!
//! The formulas accept any value; these checks enforce the ranges the
//! widgets advertise and report the first violated rule. Every money field
//! is also capped at [`MAX_AMOUNT`].

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationInput, EmployeeCostInput, ThirteenthSalaryInput, VacationInput};

/// Smallest accepted salary (one cent).
const MIN_SALARY: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Largest accepted money amount (R$ 1.000.000.000,00).
///
/// Applies to salaries, the vacation advance and every benefit. Inputs in
/// range keep the employee cost annual total far below `Decimal::MAX`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

fn require_min_salary(field: &str, value: Decimal) -> EngineResult<()> {
    if value < MIN_SALARY {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must be at least {}", MIN_SALARY),
        });
    }
    require_at_most_max(field, value)
}

fn require_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: "must not be negative".to_string(),
        });
    }
    require_at_most_max(field, value)
}

fn require_at_most_max(field: &str, value: Decimal) -> EngineResult<()> {
    if value > MAX_AMOUNT {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must be at most {}", MAX_AMOUNT),
        });
    }
    Ok(())
}

fn require_range(field: &str, value: u32, min: u32, max: u32) -> EngineResult<()> {
    if !(min..=max).contains(&value) {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Validates a vacation input.
pub fn validate_vacation(input: &VacationInput) -> EngineResult<()> {
    require_min_salary("monthlySalary", input.monthly_salary)?;
    require_range("monthsWorked", input.months_worked, 1, 12)?;
    require_range("vacationDays", input.vacation_days, 10, 30)?;
    if let Some(amount) = input.advance_amount {
        require_non_negative("advanceAmount", amount)?;
    }
    Ok(())
}

/// Validates a 13th salary input.
pub fn validate_thirteenth_salary(input: &ThirteenthSalaryInput) -> EngineResult<()> {
    require_min_salary("monthlySalary", input.monthly_salary)?;
    require_range("monthsWorked", input.months_worked, 1, 12)
}

/// Validates an employee cost input.
pub fn validate_employee_cost(input: &EmployeeCostInput) -> EngineResult<()> {
    require_min_salary("baseSalary", input.base_salary)?;
    require_non_negative("mealAllowance", input.meal_allowance)?;
    require_non_negative("transportAllowance", input.transport_allowance)?;
    require_non_negative("healthPlan", input.health_plan)?;
    require_non_negative("otherBenefits", input.other_benefits)
}

/// Validates any calculator input.
///
/// # Arguments
///
/// * `input` - The tagged calculator input
///
/// # Returns
///
/// `Ok(())` when every field is in range, otherwise `InvalidInput` naming the
/// first offending field in its camelCase wire form.
///
/// # Examples
///
/// ```
/// use clt_calc::calculation::validate;
/// use clt_calc::models::{CalculationInput, ThirteenthSalaryInput};
/// use rust_decimal::Decimal;
///
/// let input = CalculationInput::ThirteenthSalary(ThirteenthSalaryInput {
///     monthly_salary: Decimal::from(3000),
///     months_worked: 13,
/// });
/// assert!(validate(&input).is_err());
/// ```
pub fn validate(input: &CalculationInput) -> EngineResult<()> {
    match input {
        CalculationInput::Vacation(v) => validate_vacation(v),
        CalculationInput::ThirteenthSalary(t) => validate_thirteenth_salary(t),
        CalculationInput::EmployeeCost(e) => validate_employee_cost(e),
    }
}

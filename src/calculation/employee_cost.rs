//! Employee cost (custo do funcionário) calculation.
//!
//! Estimates what an employee costs the employer per month and per year:
//! base salary, statutory accruals (13th salary, vacation and its bonus),
//! the FGTS deposit, a flat approximation of payroll charges and any
//! discretionary benefits.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::models::{BenefitsBreakdown, EmployeeCostInput, EmployeeCostOutput};

use super::MONTHS_PER_YEAR;

/// Notice attached to every employee cost estimate.
pub const EMPLOYEE_COST_DISCLAIMER: &str = "Valores estimados. Os encargos sociais são \
uma aproximação e variam conforme o regime tributário e a atividade da empresa.";

/// Calculates employee cost with the default statutory rates.
///
/// # Arguments
///
/// * `input` - Base salary and the four benefit amounts
///
/// # Returns
///
/// An `EmployeeCostOutput` carrying [`EMPLOYEE_COST_DISCLAIMER`]; see
/// [`calculate_employee_cost_with`] for the formulas.
///
/// # Examples
///
/// ```
/// use clt_calc::calculation::calculate_employee_cost;
/// use clt_calc::models::EmployeeCostInput;
/// use rust_decimal::Decimal;
///
/// let output = calculate_employee_cost(&EmployeeCostInput {
///     base_salary: Decimal::from(3000),
///     meal_allowance: Decimal::from(500),
///     transport_allowance: Decimal::from(200),
///     health_plan: Decimal::from(300),
///     other_benefits: Decimal::from(100),
/// });
///
/// assert_eq!(output.severance_fund_contribution, Decimal::from(240));
/// assert_eq!(output.benefits.total, Decimal::from(1100));
/// assert_eq!(output.monthly_cost.round_dp(2), Decimal::new(573333, 2));
/// ```
pub fn calculate_employee_cost(input: &EmployeeCostInput) -> EmployeeCostOutput {
    calculate_employee_cost_with(input, &StatutoryRates::default())
}

/// Calculates employee cost with the given rates.
///
/// `monthly_cost` adds up the base salary, every accrual, the FGTS deposit,
/// payroll charges and the benefits total; `annual_cost` is twelve times that.
///
/// # Arguments
///
/// * `input` - Base salary and the four benefit amounts
/// * `rates` - Supplies `fgts_rate` and `payroll_charges_rate`
///
/// # Returns
///
/// An `EmployeeCostOutput`. Every sum and product saturates at
/// `Decimal::MAX`/`Decimal::MIN`, so amounts past the validated range give a
/// clamped result rather than a panic.
pub fn calculate_employee_cost_with(
    input: &EmployeeCostInput,
    rates: &StatutoryRates,
) -> EmployeeCostOutput {
    let base_salary = input.base_salary;
    let thirteenth_salary_accrual = base_salary / MONTHS_PER_YEAR;
    let vacation_accrual = base_salary / MONTHS_PER_YEAR;
    let vacation_bonus_accrual = vacation_accrual / Decimal::from(3);
    let severance_fund_contribution = base_salary.saturating_mul(rates.fgts_rate);
    let payroll_charges = base_salary.saturating_mul(rates.payroll_charges_rate);

    let benefits = BenefitsBreakdown {
        meal_allowance: input.meal_allowance,
        transport_allowance: input.transport_allowance,
        health_plan: input.health_plan,
        other_benefits: input.other_benefits,
        total: saturating_sum(&[
            input.meal_allowance,
            input.transport_allowance,
            input.health_plan,
            input.other_benefits,
        ]),
    };

    let monthly_cost = saturating_sum(&[
        base_salary,
        thirteenth_salary_accrual,
        vacation_accrual,
        vacation_bonus_accrual,
        severance_fund_contribution,
        payroll_charges,
        benefits.total,
    ]);

    EmployeeCostOutput {
        base_salary,
        thirteenth_salary_accrual,
        vacation_accrual,
        vacation_bonus_accrual,
        severance_fund_contribution,
        payroll_charges,
        benefits,
        monthly_cost,
        annual_cost: monthly_cost.saturating_mul(MONTHS_PER_YEAR),
        disclaimer: EMPLOYEE_COST_DISCLAIMER.to_string(),
    }
}

fn saturating_sum(amounts: &[Decimal]) -> Decimal {
    amounts
        .iter()
        .fold(Decimal::ZERO, |total, amount| total.saturating_add(*amount))
}

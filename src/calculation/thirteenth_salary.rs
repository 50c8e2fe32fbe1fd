//! 13th salary (décimo terceiro) calculation.
//!
//! The 13th salary is one extra month of salary prorated by months worked,
//! paid in two installments and subject to an estimated INSS withholding
//! capped at a pro-rated ceiling.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::models::{ThirteenthSalaryInput, ThirteenthSalaryOutput};

use super::prorate;

/// Calculates the 13th salary with the default statutory rates.
///
/// # Arguments
///
/// * `input` - Monthly salary and months worked
///
/// # Returns
///
/// A `ThirteenthSalaryOutput`; see [`calculate_thirteenth_salary_with`] for
/// the formulas.
///
/// # Examples
///
/// ```
/// use clt_calc::calculation::calculate_thirteenth_salary;
/// use clt_calc::models::ThirteenthSalaryInput;
/// use rust_decimal::Decimal;
///
/// let output = calculate_thirteenth_salary(&ThirteenthSalaryInput {
///     monthly_salary: Decimal::from(3000),
///     months_worked: 12,
/// });
///
/// assert_eq!(output.first_installment, Decimal::from(1500));
/// assert_eq!(output.social_security_withholding, Decimal::from(330));
/// assert_eq!(output.net_value, Decimal::from(2670));
/// ```
pub fn calculate_thirteenth_salary(input: &ThirteenthSalaryInput) -> ThirteenthSalaryOutput {
    calculate_thirteenth_salary_with(input, &StatutoryRates::default())
}

/// Calculates the 13th salary with the given rates.
///
/// - `proportional_value = monthly_salary * months_worked / 12`
/// - `first_installment = proportional_value / 2`
/// - `second_installment = proportional_value - first_installment`
/// - `social_security_withholding = min(proportional_value * inss_rate,
///   inss_monthly_ceiling * months_worked / 12)`
/// - `net_value = proportional_value - social_security_withholding`
///
/// The second installment is the remainder, never a second division, so the
/// two always add up to the proportional value.
///
/// # Arguments
///
/// * `input` - Monthly salary and months worked
/// * `rates` - Supplies `inss_rate` and `inss_monthly_ceiling`
///
/// # Returns
///
/// A `ThirteenthSalaryOutput` echoing `months_worked`. Products and
/// differences saturate at the `Decimal` bounds instead of panicking.
pub fn calculate_thirteenth_salary_with(
    input: &ThirteenthSalaryInput,
    rates: &StatutoryRates,
) -> ThirteenthSalaryOutput {
    let proportional_value = prorate(input.monthly_salary, input.months_worked);
    let first_installment = proportional_value / Decimal::TWO;
    let second_installment = proportional_value.saturating_sub(first_installment);

    let uncapped = proportional_value.saturating_mul(rates.inss_rate);
    let ceiling = prorate(rates.inss_monthly_ceiling, input.months_worked);
    let social_security_withholding = uncapped.min(ceiling);

    ThirteenthSalaryOutput {
        proportional_value,
        first_installment,
        second_installment,
        social_security_withholding,
        net_value: proportional_value.saturating_sub(social_security_withholding),
        months_worked: input.months_worked,
    }
}

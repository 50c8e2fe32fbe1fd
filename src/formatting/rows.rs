//! Result formatter: calculation outputs to display rows.
//!
//! Every calculator has a fixed list of rows; values never add or remove
//! rows, they only change what the rows show.

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::models::{
    BenefitsBreakdown, CalculationOutput, CalculatorKind, EmployeeCostOutput, FormattedResultRow,
    ThirteenthSalaryOutput, VacationOutput,
};

use super::currency::format_brl;
use super::parsing::parse_loose_amount;

/// Row labels. Saved calculations are keyed by these, so they are part of
/// the persisted format.
pub mod labels {
    /// Proportional value (vacation and 13th salary).
    pub const PROPORTIONAL_VALUE: &str = "Valor Proporcional";
    /// Vacation one-third bonus.
    pub const ONE_THIRD_BONUS: &str = "Adicional 1/3";
    /// Vacation net total.
    pub const NET_TOTAL: &str = "Total Líquido";
    /// 13th salary first installment.
    pub const FIRST_INSTALLMENT: &str = "1ª Parcela (até 30/11)";
    /// 13th salary second installment.
    pub const SECOND_INSTALLMENT: &str = "2ª Parcela (até 20/12)";
    /// 13th salary INSS withholding.
    pub const ESTIMATED_INSS: &str = "INSS estimado";
    /// 13th salary net value.
    pub const ESTIMATED_NET_VALUE: &str = "Valor Líquido Estimado";
    /// Older label for the 13th salary net value.
    pub const LEGACY_NET_VALUE: &str = "Valor Líquido";
    /// Employee cost base salary.
    pub const BASE_SALARY: &str = "Salário Base";
    /// Employee cost 13th salary accrual.
    pub const THIRTEENTH_ACCRUAL: &str = "13º Salário (prop.)";
    /// Employee cost vacation accrual.
    pub const VACATION_ACCRUAL: &str = "Férias + 1/3 (prop.)";
    /// Employee cost FGTS deposit.
    pub const SEVERANCE_FUND: &str = "FGTS (8%)";
    /// Employee cost payroll charges.
    pub const PAYROLL_CHARGES: &str = "Encargos Sociais";
    /// Employee cost benefits total.
    pub const BENEFITS: &str = "Benefícios";
    /// Employee cost monthly total.
    pub const MONTHLY_COST: &str = "Custo Mensal Total";
    /// Employee cost yearly total.
    pub const ANNUAL_COST: &str = "Custo Anual";
}

fn row(label: &str, amount: Decimal, highlight: bool) -> FormattedResultRow {
    FormattedResultRow::new(label, format_brl(amount), highlight)
}

/// Formats a calculation output into display rows.
///
/// # Examples
///
/// ```
/// use clt_calc::calculation::calculate_vacation;
/// use clt_calc::formatting::format_result;
/// use clt_calc::models::{CalculationOutput, VacationInput};
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
/// let rows = format_result(&CalculationOutput::Vacation(output));
/// assert_eq!(rows.len(), 3);
/// assert_eq!(rows[2].label, "Total Líquido");
/// assert_eq!(rows[2].value, "R$\u{a0}4.000,00");
/// assert!(rows[2].highlight);
/// ```
pub fn format_result(output: &CalculationOutput) -> Vec<FormattedResultRow> {
    match output {
        CalculationOutput::Vacation(v) => vacation_rows(v),
        CalculationOutput::ThirteenthSalary(t) => thirteenth_salary_rows(t),
        CalculationOutput::EmployeeCost(e) => employee_cost_rows(e),
    }
}

fn vacation_rows(output: &VacationOutput) -> Vec<FormattedResultRow> {
    vec![
        row(labels::PROPORTIONAL_VALUE, output.proportional_value, true),
        row(labels::ONE_THIRD_BONUS, output.one_third_bonus, false),
        row(labels::NET_TOTAL, output.net_value, true),
    ]
}

fn thirteenth_salary_rows(output: &ThirteenthSalaryOutput) -> Vec<FormattedResultRow> {
    vec![
        row(labels::PROPORTIONAL_VALUE, output.proportional_value, true),
        row(labels::FIRST_INSTALLMENT, output.first_installment, false),
        row(labels::SECOND_INSTALLMENT, output.second_installment, false),
        FormattedResultRow::new(
            labels::ESTIMATED_INSS,
            format!("- {}", format_brl(output.social_security_withholding)),
            false,
        ),
        row(labels::ESTIMATED_NET_VALUE, output.net_value, true),
    ]
}

fn employee_cost_rows(output: &EmployeeCostOutput) -> Vec<FormattedResultRow> {
    vec![
        row(labels::BASE_SALARY, output.base_salary, false),
        row(labels::THIRTEENTH_ACCRUAL, output.thirteenth_salary_accrual, false),
        row(labels::VACATION_ACCRUAL, output.vacation_accrual, false),
        row(labels::SEVERANCE_FUND, output.severance_fund_contribution, false),
        row(labels::PAYROLL_CHARGES, output.payroll_charges, false),
        row(labels::BENEFITS, output.benefits.total, false),
        row(labels::MONTHLY_COST, output.monthly_cost, true),
        row(labels::ANNUAL_COST, output.annual_cost, true),
    ]
}

/// Formats an untyped output record for a calculator tag.
///
/// Unknown tags yield no rows. Fields are read with
/// [`parse_loose_amount`], so absent or malformed fields show as zero.
///
/// # Examples
///
/// ```
/// use clt_calc::formatting::format_loose;
/// use serde_json::json;
///
/// let rows = format_loose("thirteenthSalary", &json!({"proportionalValue": 3000}));
/// assert_eq!(rows.len(), 5);
/// assert_eq!(rows[4].value, "R$\u{a0}0,00");
///
/// assert!(format_loose("overtime", &json!({})).is_empty());
/// ```
pub fn format_loose(kind: &str, output: &Value) -> Vec<FormattedResultRow> {
    let Some(kind) = CalculatorKind::from_tag(kind) else {
        return Vec::new();
    };

    let empty = Map::new();
    let fields = output.as_object().unwrap_or(&empty);
    let amount = |key: &str| fields.get(key).map(parse_loose_amount).unwrap_or_default();

    match kind {
        CalculatorKind::Vacation => vacation_rows(&VacationOutput {
            proportional_value: amount("proportionalValue"),
            one_third_bonus: amount("oneThirdBonus"),
            net_value: amount("netValue"),
            ..VacationOutput::default()
        }),
        CalculatorKind::ThirteenthSalary => thirteenth_salary_rows(&ThirteenthSalaryOutput {
            proportional_value: amount("proportionalValue"),
            first_installment: amount("firstInstallment"),
            second_installment: amount("secondInstallment"),
            social_security_withholding: amount("socialSecurityWithholding"),
            net_value: amount("netValue"),
            ..ThirteenthSalaryOutput::default()
        }),
        CalculatorKind::EmployeeCost => {
            let benefits_total = fields
                .get("benefits")
                .and_then(|benefits| benefits.get("total"))
                .map(parse_loose_amount)
                .unwrap_or_default();

            employee_cost_rows(&EmployeeCostOutput {
                base_salary: amount("baseSalary"),
                thirteenth_salary_accrual: amount("thirteenthSalaryAccrual"),
                vacation_accrual: amount("vacationAccrual"),
                severance_fund_contribution: amount("severanceFundContribution"),
                payroll_charges: amount("payrollCharges"),
                benefits: BenefitsBreakdown {
                    total: benefits_total,
                    ..BenefitsBreakdown::default()
                },
                monthly_cost: amount("monthlyCost"),
                annual_cost: amount("annualCost"),
                ..EmployeeCostOutput::default()
            })
        }
    }
}

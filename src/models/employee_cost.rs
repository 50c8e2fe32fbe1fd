//! Employee cost (custo do funcionário) input and output records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Input for the employee cost calculator. Benefits default to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCostInput {
    /// Gross monthly base salary.
    pub base_salary: Decimal,
    /// Meal allowance (vale-refeição).
    #[serde(default)]
    pub meal_allowance: Decimal,
    /// Transport allowance (vale-transporte).
    #[serde(default)]
    pub transport_allowance: Decimal,
    /// Health plan paid by the employer.
    #[serde(default)]
    pub health_plan: Decimal,
    /// Any other monthly benefit.
    #[serde(default)]
    pub other_benefits: Decimal,
}

/// Breakdown of the discretionary benefits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitsBreakdown {
    /// Meal allowance.
    pub meal_allowance: Decimal,
    /// Transport allowance.
    pub transport_allowance: Decimal,
    /// Health plan.
    pub health_plan: Decimal,
    /// Other benefits.
    pub other_benefits: Decimal,
    /// Sum of the four fields above.
    pub total: Decimal,
}

/// Result of the employee cost calculation.
///
/// `monthly_cost` is the sum of every accrual, contribution and benefit;
/// `annual_cost == monthly_cost * 12`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCostOutput {
    /// Echo of the base salary.
    pub base_salary: Decimal,
    /// Monthly accrual towards the 13th salary.
    pub thirteenth_salary_accrual: Decimal,
    /// Monthly accrual towards vacation pay.
    pub vacation_accrual: Decimal,
    /// Monthly accrual towards the vacation one-third bonus.
    pub vacation_bonus_accrual: Decimal,
    /// FGTS deposit.
    pub severance_fund_contribution: Decimal,
    /// Flat approximation of employer social charges.
    pub payroll_charges: Decimal,
    /// Discretionary benefits.
    pub benefits: BenefitsBreakdown,
    /// Total monthly cost.
    pub monthly_cost: Decimal,
    /// Total yearly cost.
    pub annual_cost: Decimal,
    /// Notice shown with the estimate.
    pub disclaimer: String,
}

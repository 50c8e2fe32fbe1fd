//! Property tests for the calculators, the formatter and the amount parser.

use proptest::prelude::*;
use proptest::test_runner::Config;
use rust_decimal::Decimal;

use clt_calc::calculation::{
    calculate_employee_cost, calculate_thirteenth_salary, calculate_vacation,
};
use clt_calc::formatting::{format_brl, format_loose, format_result, parse_amount_str};
use clt_calc::models::{
    CalculationOutput, CalculatorKind, EmployeeCostInput, ThirteenthSalaryInput, VacationInput,
};

fn epsilon() -> Decimal {
    Decimal::new(1, 9)
}

/// Amounts in cents, from R$ 0,01 up to R$ 1.000.000,00.
fn salary() -> impl Strategy<Value = Decimal> {
    (1_i64..=100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn allowance() -> impl Strategy<Value = Decimal> {
    (0_i64..=10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn vacation_totals_are_consistent(
        monthly_salary in salary(),
        months_worked in 1_u32..=12,
        vacation_days in 10_u32..=30,
        deduct_advance in any::<bool>(),
        advance in proptest::option::of(allowance()),
    ) {
        let output = calculate_vacation(&VacationInput {
            monthly_salary,
            months_worked,
            vacation_days,
            deduct_advance,
            advance_amount: advance,
        });

        let gross_gap = output.gross_value - (output.proportional_value + output.one_third_bonus);
        prop_assert!(gross_gap.abs() <= epsilon());
        let net_gap = output.net_value - (output.gross_value - output.deduction);
        prop_assert!(net_gap.abs() <= epsilon());
        if !deduct_advance || advance.is_none() {
            prop_assert_eq!(output.deduction, Decimal::ZERO);
        }
        prop_assert_eq!(output.vacation_days, vacation_days);
        prop_assert_eq!(output.months_worked, months_worked);
    }

    #[test]
    fn thirteenth_installments_sum_exactly(
        monthly_salary in salary(),
        months_worked in 1_u32..=12,
    ) {
        let output = calculate_thirteenth_salary(&ThirteenthSalaryInput {
            monthly_salary,
            months_worked,
        });

        prop_assert_eq!(
            output.first_installment + output.second_installment,
            output.proportional_value
        );
        prop_assert_eq!(
            output.net_value,
            output.proportional_value - output.social_security_withholding
        );
    }

    #[test]
    fn thirteenth_withholding_respects_ceiling(
        monthly_salary in salary(),
        months_worked in 1_u32..=12,
    ) {
        let output = calculate_thirteenth_salary(&ThirteenthSalaryInput {
            monthly_salary,
            months_worked,
        });

        let ceiling = Decimal::new(76078, 2) * Decimal::from(months_worked) / Decimal::from(12);
        let uncapped = output.proportional_value * Decimal::new(11, 2);

        prop_assert!(output.social_security_withholding <= ceiling + epsilon());
        if uncapped < ceiling {
            prop_assert_eq!(output.social_security_withholding, uncapped);
        }
    }

    #[test]
    fn employee_cost_adds_up(
        base_salary in salary(),
        meal_allowance in allowance(),
        transport_allowance in allowance(),
        health_plan in allowance(),
        other_benefits in allowance(),
    ) {
        let output = calculate_employee_cost(&EmployeeCostInput {
            base_salary,
            meal_allowance,
            transport_allowance,
            health_plan,
            other_benefits,
        });

        let expected = output.base_salary
            + output.thirteenth_salary_accrual
            + output.vacation_accrual
            + output.vacation_bonus_accrual
            + output.severance_fund_contribution
            + output.payroll_charges
            + output.benefits.total;
        prop_assert!((output.monthly_cost - expected).abs() <= epsilon());
        prop_assert_eq!(output.annual_cost, output.monthly_cost * Decimal::from(12));
        prop_assert_eq!(
            output.benefits.total,
            meal_allowance + transport_allowance + health_plan + other_benefits
        );
    }

    #[test]
    fn formatted_row_labels_do_not_depend_on_magnitude(
        monthly_salary in salary(),
        months_worked in 1_u32..=12,
    ) {
        let small = format_result(&CalculationOutput::ThirteenthSalary(
            calculate_thirteenth_salary(&ThirteenthSalaryInput {
                monthly_salary: Decimal::new(1, 2),
                months_worked: 1,
            }),
        ));
        let any = format_result(&CalculationOutput::ThirteenthSalary(
            calculate_thirteenth_salary(&ThirteenthSalaryInput {
                monthly_salary,
                months_worked,
            }),
        ));

        let small_labels: Vec<&str> = small.iter().map(|r| r.label.as_str()).collect();
        let any_labels: Vec<&str> = any.iter().map(|r| r.label.as_str()).collect();
        prop_assert_eq!(small_labels, any_labels);
    }

    #[test]
    fn currency_round_trips_within_a_cent(cents in -10_000_000_000_i64..=10_000_000_000) {
        let amount = Decimal::new(cents, 2);
        prop_assert_eq!(parse_amount_str(&format_brl(amount)), amount);
    }

    #[test]
    fn currency_round_trip_rounds_extra_digits(mills in -1_000_000_000_i64..=1_000_000_000) {
        let amount = Decimal::new(mills, 3);
        let parsed = parse_amount_str(&format_brl(amount));
        prop_assert!((parsed - amount).abs() <= Decimal::new(5, 3));
    }
}

#[test]
fn loose_row_counts_are_fixed_per_kind() {
    let expected = [
        (CalculatorKind::Vacation, 3),
        (CalculatorKind::ThirteenthSalary, 5),
        (CalculatorKind::EmployeeCost, 8),
    ];

    for (kind, count) in expected {
        let empty = format_loose(kind.as_str(), &serde_json::json!({}));
        let garbage = format_loose(kind.as_str(), &serde_json::json!({"netValue": "abc"}));
        assert_eq!(empty.len(), count, "{}", kind);
        assert_eq!(garbage.len(), count, "{}", kind);
    }
}

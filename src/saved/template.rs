//! Creating saved records and reusing them as form templates.

use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::formatting::{format_result, parse_loose_amount};
use crate::models::{
    CalculationInput, CalculationOutput, CalculatorKind, EmployeeCostInput,
    SavedCalculationRecord, ThirteenthSalaryInput, VacationInput,
};

use super::{DEFAULT_MONTHS_WORKED, DEFAULT_VACATION_DAYS, input_count};

impl SavedCalculationRecord {
    /// Builds a new record for a finished calculation.
    ///
    /// `outputs` holds the formatted rows keyed by label, as older clients
    /// expect, and `raw_output` keeps the exact numbers.
    pub fn from_calculation(
        input: &CalculationInput,
        output: &CalculationOutput,
        name: Option<String>,
    ) -> Self {
        let outputs = format_result(output)
            .into_iter()
            .map(|row| (row.label, Value::String(row.value)))
            .collect();

        Self {
            id: Uuid::new_v4(),
            calculator_kind: output.kind().as_str().to_string(),
            name,
            inputs: input_fields(input),
            outputs,
            raw_output: Some(output.clone()),
            created_at: Utc::now(),
        }
    }
}

fn input_fields(input: &CalculationInput) -> Map<String, Value> {
    match serde_json::to_value(input) {
        Ok(Value::Object(mut tagged)) => match tagged.remove("input") {
            Some(Value::Object(fields)) => fields,
            _ => Map::new(),
        },
        _ => Map::new(),
    }
}

/// Rebuilds a form input from a saved record, for "use as template".
///
/// Values are read leniently: missing amounts become zero, `monthsWorked`
/// defaults to 12 and `vacationDays` to 30. Returns `None` for an unknown
/// calculator tag. The result is not validated.
pub fn prefill_input(record: &SavedCalculationRecord) -> Option<CalculationInput> {
    let inputs = &record.inputs;
    let amount = |key: &str| inputs.get(key).map(parse_loose_amount).unwrap_or_default();

    let input = match record.kind()? {
        CalculatorKind::Vacation => CalculationInput::Vacation(VacationInput {
            monthly_salary: amount("monthlySalary"),
            months_worked: input_count(inputs, "monthsWorked", DEFAULT_MONTHS_WORKED),
            vacation_days: input_count(inputs, "vacationDays", DEFAULT_VACATION_DAYS),
            deduct_advance: flag(inputs, "deductAdvance"),
            advance_amount: optional_amount(inputs, "advanceAmount"),
        }),
        CalculatorKind::ThirteenthSalary => {
            CalculationInput::ThirteenthSalary(ThirteenthSalaryInput {
                monthly_salary: amount("monthlySalary"),
                months_worked: input_count(inputs, "monthsWorked", DEFAULT_MONTHS_WORKED),
            })
        }
        CalculatorKind::EmployeeCost => CalculationInput::EmployeeCost(EmployeeCostInput {
            base_salary: amount("baseSalary"),
            meal_allowance: amount("mealAllowance"),
            transport_allowance: amount("transportAllowance"),
            health_plan: amount("healthPlan"),
            other_benefits: amount("otherBenefits"),
        }),
    };

    Some(input)
}

fn flag(inputs: &Map<String, Value>, key: &str) -> bool {
    match inputs.get(key) {
        Some(Value::Bool(value)) => *value,
        Some(Value::String(text)) => text.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

fn optional_amount(inputs: &Map<String, Value>, key: &str) -> Option<Decimal> {
    inputs
        .get(key)
        .filter(|value| !value.is_null())
        .map(parse_loose_amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate;
    use crate::saved::reconstruct_output;
    use serde_json::json;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn legacy(kind: &str, inputs: Value) -> SavedCalculationRecord {
        SavedCalculationRecord {
            id: Uuid::new_v4(),
            calculator_kind: kind.to_string(),
            name: Some("Minhas férias".to_string()),
            inputs: inputs.as_object().cloned().unwrap_or_default(),
            outputs: Map::new(),
            raw_output: None,
            created_at: Utc::now(),
        }
    }

    fn employee_cost_input() -> CalculationInput {
        CalculationInput::EmployeeCost(EmployeeCostInput {
            base_salary: dec("3000"),
            meal_allowance: dec("500"),
            transport_allowance: dec("200"),
            health_plan: dec("300"),
            other_benefits: dec("100"),
        })
    }

    #[test]
    fn test_from_calculation_stores_rows_and_raw_output() {
        let input = employee_cost_input();
        let output = calculate(&input);

        let record =
            SavedCalculationRecord::from_calculation(&input, &output, Some("CLT".to_string()));

        assert_eq!(record.calculator_kind, "employeeCost");
        assert_eq!(record.name.as_deref(), Some("CLT"));
        assert_eq!(record.outputs.len(), 8);
        assert_eq!(
            record.outputs["Custo Mensal Total"],
            json!("R$\u{a0}5.733,33")
        );
        assert_eq!(record.raw_output.as_ref(), Some(&output));
        assert_eq!(record.inputs["baseSalary"], json!("3000"));
    }

    #[test]
    fn test_saved_employee_cost_is_rebuilt_from_raw_output() {
        let input = employee_cost_input();
        let output = calculate(&input);
        let record = SavedCalculationRecord::from_calculation(&input, &output, None);

        assert_eq!(reconstruct_output(&record), Some(output));
    }

    #[test]
    fn test_prefill_round_trips_a_new_record() {
        let input = CalculationInput::Vacation(VacationInput {
            monthly_salary: dec("2500.50"),
            months_worked: 9,
            vacation_days: 20,
            deduct_advance: true,
            advance_amount: Some(dec("300")),
        });
        let record = SavedCalculationRecord::from_calculation(&input, &calculate(&input), None);

        assert_eq!(prefill_input(&record), Some(input));
    }

    #[test]
    fn test_prefill_legacy_vacation_with_loose_values() {
        let record = legacy(
            "vacation",
            json!({
                "monthlySalary": "R$ 2.000,00",
                "monthsWorked": 6,
                "deductAdvance": "true",
                "advanceAmount": 150
            }),
        );

        match prefill_input(&record) {
            Some(CalculationInput::Vacation(v)) => {
                assert_eq!(v.monthly_salary, dec("2000"));
                assert_eq!(v.months_worked, 6);
                assert_eq!(v.vacation_days, 30);
                assert!(v.deduct_advance);
                assert_eq!(v.advance_amount, Some(dec("150")));
            }
            other => panic!("Expected vacation input, got {:?}", other),
        }
    }

    #[test]
    fn test_prefill_null_advance_is_absent() {
        let record = legacy(
            "vacation",
            json!({"monthlySalary": 1000, "advanceAmount": null, "deductAdvance": false}),
        );

        match prefill_input(&record) {
            Some(CalculationInput::Vacation(v)) => {
                assert!(!v.deduct_advance);
                assert_eq!(v.advance_amount, None);
            }
            other => panic!("Expected vacation input, got {:?}", other),
        }
    }

    #[test]
    fn test_prefill_employee_cost_missing_benefits_are_zero() {
        let record = legacy("employeeCost", json!({"baseSalary": 4200}));

        match prefill_input(&record) {
            Some(CalculationInput::EmployeeCost(e)) => {
                assert_eq!(e.base_salary, dec("4200"));
                assert_eq!(e.meal_allowance, Decimal::ZERO);
                assert_eq!(e.health_plan, Decimal::ZERO);
            }
            other => panic!("Expected employee cost input, got {:?}", other),
        }
    }

    #[test]
    fn test_prefill_unknown_kind_is_none() {
        assert!(prefill_input(&legacy("rescisao", json!({}))).is_none());
    }
}

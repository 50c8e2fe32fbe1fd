//! Rebuilding calculation outputs from saved records.
//!
//! Records written by this service carry the raw output and are returned
//! as-is when its kind matches the record's calculator tag. Older records only have the formatted rows, so the amounts are
//! parsed back from the label/value strings. That path is lossy: the vacation
//! deduction is gone and the gross value is not stored.

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::formatting::{labels, parse_loose_amount};
use crate::models::{
    CalculationOutput, CalculatorKind, SavedCalculationRecord, ThirteenthSalaryOutput,
    VacationOutput,
};

use super::{DEFAULT_MONTHS_WORKED, DEFAULT_VACATION_DAYS, input_count};

/// Rebuilds the output of a saved calculation.
///
/// Returns `None` when nothing can be rebuilt: an unknown calculator tag, or
/// an employee cost record without a raw output. A raw output whose kind
/// disagrees with the calculator tag is ignored and the formatted strings
/// are parsed instead.
///
/// For legacy vacation records the gross value is taken to be the
/// proportional value and the deduction is zero.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use clt_calc::models::{CalculationOutput, SavedCalculationRecord};
/// use clt_calc::saved::reconstruct_output;
/// use rust_decimal::Decimal;
/// use serde_json::{json, Map};
/// use uuid::Uuid;
///
/// let mut outputs = Map::new();
/// outputs.insert("Valor Proporcional".to_string(), json!("R$ 3.000,00"));
/// outputs.insert("INSS estimado".to_string(), json!("- R$ 330,00"));
/// outputs.insert("Valor Líquido".to_string(), json!("R$ 2.670,00"));
///
/// let record = SavedCalculationRecord {
///     id: Uuid::new_v4(),
///     calculator_kind: "thirteenthSalary".to_string(),
///     name: None,
///     inputs: Map::new(),
///     outputs,
///     raw_output: None,
///     created_at: Utc::now(),
/// };
///
/// match reconstruct_output(&record) {
///     Some(CalculationOutput::ThirteenthSalary(output)) => {
///         assert_eq!(output.social_security_withholding, Decimal::from(330));
///         assert_eq!(output.net_value, Decimal::from(2670));
///         assert_eq!(output.months_worked, 12);
///     }
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
pub fn reconstruct_output(record: &SavedCalculationRecord) -> Option<CalculationOutput> {
    if let Some(raw) = &record.raw_output {
        if record.kind() == Some(raw.kind()) {
            return Some(raw.clone());
        }
    }

    let outputs = &record.outputs;
    let months_worked = input_count(&record.inputs, "monthsWorked", DEFAULT_MONTHS_WORKED);

    match record.kind()? {
        CalculatorKind::Vacation => {
            let proportional_value = stored(outputs, labels::PROPORTIONAL_VALUE);
            Some(CalculationOutput::Vacation(VacationOutput {
                proportional_value,
                one_third_bonus: stored(outputs, labels::ONE_THIRD_BONUS),
                // TODO: include the one-third bonus once stored records are
                // confirmed to never have relied on this value.
                gross_value: proportional_value,
                deduction: Decimal::ZERO,
                net_value: stored(outputs, labels::NET_TOTAL),
                vacation_days: input_count(
                    &record.inputs,
                    "vacationDays",
                    DEFAULT_VACATION_DAYS,
                ),
                months_worked,
            }))
        }
        CalculatorKind::ThirteenthSalary => {
            Some(CalculationOutput::ThirteenthSalary(ThirteenthSalaryOutput {
                proportional_value: stored(outputs, labels::PROPORTIONAL_VALUE),
                first_installment: stored(outputs, labels::FIRST_INSTALLMENT),
                second_installment: stored(outputs, labels::SECOND_INSTALLMENT),
                social_security_withholding: stored(outputs, labels::ESTIMATED_INSS).abs(),
                net_value: first_stored(
                    outputs,
                    &[
                        labels::ESTIMATED_NET_VALUE,
                        labels::NET_TOTAL,
                        labels::LEGACY_NET_VALUE,
                    ],
                ),
                months_worked,
            }))
        }
        CalculatorKind::EmployeeCost => None,
    }
}

fn stored(outputs: &Map<String, Value>, label: &str) -> Decimal {
    outputs
        .get(label)
        .map(parse_loose_amount)
        .unwrap_or_default()
}

/// Reads the first label that holds a value, trying older labels in order.
fn first_stored(outputs: &Map<String, Value>, candidates: &[&str]) -> Decimal {
    candidates
        .iter()
        .filter_map(|label| outputs.get(*label))
        .find(|value| match value {
            Value::Null => false,
            Value::String(text) => !text.trim().is_empty(),
            _ => true,
        })
        .map(parse_loose_amount)
        .unwrap_or_default()
}

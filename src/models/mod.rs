//! Core data models for the payroll calculators.
//!
//! This module contains the calculator inputs and outputs, the display rows
//! produced from them, persisted saved-calculation records and A/B
//! experiment definitions.

mod calculation;
mod calculator_kind;
mod employee_cost;
mod experiment;
mod formatted_row;
mod saved_calculation;
mod thirteenth_salary;
mod vacation;

pub use calculation::{CalculationInput, CalculationOutput};
pub use calculator_kind::CalculatorKind;
pub use employee_cost::{BenefitsBreakdown, EmployeeCostInput, EmployeeCostOutput};
pub use experiment::{Experiment, Variant};
pub use formatted_row::FormattedResultRow;
pub use saved_calculation::SavedCalculationRecord;
pub use thirteenth_salary::{ThirteenthSalaryInput, ThirteenthSalaryOutput};
pub use vacation::{VacationInput, VacationOutput};

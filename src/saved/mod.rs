//! Saved calculations: building records, rebuilding their outputs and
//! reusing their inputs.

mod reconstruct;
mod template;

use rust_decimal::prelude::ToPrimitive;
use serde_json::{Map, Value};

use crate::formatting::parse_loose_amount;

pub use reconstruct::reconstruct_output;
pub use template::prefill_input;

pub(crate) const DEFAULT_MONTHS_WORKED: u32 = 12;
pub(crate) const DEFAULT_VACATION_DAYS: u32 = 30;

/// Reads a whole-number input, falling back to `default` when it is missing,
/// zero, negative or not a number.
pub(crate) fn input_count(inputs: &Map<String, Value>, key: &str, default: u32) -> u32 {
    inputs
        .get(key)
        .map(parse_loose_amount)
        .and_then(|value| value.trunc().to_u32())
        .filter(|count| *count > 0)
        .unwrap_or(default)
}

//! Lenient amount parsing for persisted values.
//!
//! Saved calculations store amounts however they were submitted or
//! displayed: numbers, plain decimal strings or pt-BR currency strings. These
//! functions turn any of them back into a [`Decimal`] and fall back to zero
//! instead of failing.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde_json::Value;

use super::currency::CURRENCY_SYMBOL;

/// Converts a loosely typed persisted value into an amount.
///
/// - `null` and non-numeric types yield zero
/// - numbers are taken as-is
/// - strings go through [`parse_amount_str`]
///
/// # Examples
///
/// ```
/// use clt_calc::formatting::parse_loose_amount;
/// use rust_decimal::Decimal;
/// use serde_json::json;
///
/// assert_eq!(parse_loose_amount(&json!("R$ 1.234,56")), Decimal::new(123456, 2));
/// assert_eq!(parse_loose_amount(&json!(12.5)), Decimal::new(125, 1));
/// assert_eq!(parse_loose_amount(&json!(null)), Decimal::ZERO);
/// ```
pub fn parse_loose_amount(value: &Value) -> Decimal {
    match value {
        Value::Number(number) => parse_plain(&number.to_string()),
        Value::String(text) => parse_amount_str(text),
        _ => Decimal::ZERO,
    }
}

/// Parses an amount string.
///
/// Strings carrying the `R$` marker are read as pt-BR currency: a `-` before
/// or right after the marker makes the amount negative; when both `.` and `,` appear the dot groups
/// thousands and the comma is the decimal separator; a lone `,` is the
/// decimal separator. Anything else is read as a plain decimal literal.
/// Unparseable input yields zero.
pub fn parse_amount_str(text: &str) -> Decimal {
    let trimmed = text.trim();
    if !trimmed.contains(CURRENCY_SYMBOL) {
        return parse_plain(trimmed);
    }

    let without_marker = trimmed.replace(CURRENCY_SYMBOL, "");
    let unsigned = without_marker.trim();
    let negative = trimmed.starts_with('-') || unsigned.starts_with('-');
    let body = unsigned.trim_start_matches('-').trim();

    let normalized = if body.contains('.') && body.contains(',') {
        body.replace('.', "").replace(',', ".")
    } else {
        body.replace(',', ".")
    };

    let amount = parse_plain(&normalized);
    if negative { -amount } else { amount }
}

/// Converts a float into an amount, mapping NaN and infinities to zero.
pub fn amount_from_f64(value: f64) -> Decimal {
    if !value.is_finite() {
        return Decimal::ZERO;
    }
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

fn parse_plain(text: &str) -> Decimal {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .unwrap_or(Decimal::ZERO)
}

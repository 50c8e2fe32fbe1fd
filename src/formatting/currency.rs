//! Brazilian real (BRL) currency formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// The currency marker.
pub const CURRENCY_SYMBOL: &str = "R$";

/// Separator between the marker and the digits (no-break space, as pt-BR
/// locale formatting emits it).
pub const SYMBOL_SEPARATOR: char = '\u{a0}';

/// Formats an amount as pt-BR currency: `R$ 1.234,56`.
///
/// Always exactly two decimal places, rounded half away from zero; `.`
/// groups thousands and `,` separates decimals. Negative amounts are
/// prefixed with `-` before the marker.
///
/// # Examples
///
/// ```
/// use clt_calc::formatting::format_brl;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_brl(Decimal::new(123456, 2)), "R$\u{a0}1.234,56");
/// assert_eq!(format_brl(Decimal::new(-5, 1)), "-R$\u{a0}0,50");
/// ```
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let mut magnitude = rounded.abs();
    magnitude.rescale(2);
    let digits = magnitude.to_string();
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!(
        "{}{}{}{},{}",
        if negative { "-" } else { "" },
        CURRENCY_SYMBOL,
        SYMBOL_SEPARATOR,
        group_thousands(integer),
        fraction
    )
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

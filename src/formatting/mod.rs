//! Currency formatting, lenient amount parsing and the result formatter.

mod currency;
mod parsing;
mod rows;

pub use currency::{CURRENCY_SYMBOL, SYMBOL_SEPARATOR, format_brl};
pub use parsing::{amount_from_f64, parse_amount_str, parse_loose_amount};
pub use rows::{format_loose, format_result, labels};

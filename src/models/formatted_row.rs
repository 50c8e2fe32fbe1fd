//! Display rows produced by the result formatter.

use serde::{Deserialize, Serialize};

/// A labeled, currency-formatted line of a calculation result.
///
/// Rows are produced fresh for every formatting call; their order is the
/// on-screen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedResultRow {
    /// The label shown to the user (pt-BR).
    pub label: String,
    /// The formatted amount, e.g. `R$ 1.234,56`.
    pub value: String,
    /// Whether the row is a key total.
    pub highlight: bool,
}

impl FormattedResultRow {
    /// Creates a new row.
    pub fn new(label: impl Into<String>, value: impl Into<String>, highlight: bool) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            highlight,
        }
    }
}

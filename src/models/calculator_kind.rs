//! The closed set of calculators offered by the widgets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies which formula set and which formatting rules apply.
///
/// # Example
///
/// ```
/// use clt_calc::models::CalculatorKind;
///
/// assert_eq!(CalculatorKind::from_tag("thirteenthSalary"), Some(CalculatorKind::ThirteenthSalary));
/// assert_eq!(CalculatorKind::from_tag("overtime"), None);
/// assert_eq!(CalculatorKind::EmployeeCost.as_str(), "employeeCost");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CalculatorKind {
    /// Vacation pay (férias) with the one-third bonus.
    Vacation,
    /// 13th salary (décimo terceiro) paid in two installments.
    ThirteenthSalary,
    /// Total monthly and annual employer cost of an employee.
    EmployeeCost,
}

impl CalculatorKind {
    /// All calculators, in the order the widgets list them.
    pub const ALL: [CalculatorKind; 3] = [
        CalculatorKind::Vacation,
        CalculatorKind::ThirteenthSalary,
        CalculatorKind::EmployeeCost,
    ];

    /// Returns the persisted tag for this calculator.
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculatorKind::Vacation => "vacation",
            CalculatorKind::ThirteenthSalary => "thirteenthSalary",
            CalculatorKind::EmployeeCost => "employeeCost",
        }
    }

    /// Parses a persisted tag. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip_through_from_tag() {
        for kind in CalculatorKind::ALL {
            assert_eq!(CalculatorKind::from_tag(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_from_tag_is_case_sensitive() {
        assert_eq!(CalculatorKind::from_tag("Vacation"), None);
        assert_eq!(CalculatorKind::from_tag(""), None);
    }

    #[test]
    fn test_serde_uses_persisted_tags() {
        let json = serde_json::to_string(&CalculatorKind::ThirteenthSalary).unwrap();
        assert_eq!(json, "\"thirteenthSalary\"");

        let kind: CalculatorKind = serde_json::from_str("\"employeeCost\"").unwrap();
        assert_eq!(kind, CalculatorKind::EmployeeCost);
    }
}

//! Request bodies that have no domain type of their own.
//!
//! `/calculate` takes a [`crate::models::CalculationInput`] and the saved
//! endpoints take a [`crate::models::SavedCalculationRecord`] directly.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `POST /format`.
///
/// `output` is untyped: fields that are missing or malformed show as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatRequest {
    /// Calculator tag (`vacation`, `thirteenthSalary`, `employeeCost`).
    pub kind: String,
    /// The output record to format.
    #[serde(default)]
    pub output: Value,
}

/// Name of the header carrying the authenticated user's email.
pub const USER_EMAIL_HEADER: &str = "x-user-email";

//! Error types for the payroll calculators.
//!
//! The calculation core is total and never fails. These errors come from the
//! layers around it: configuration loading, input validation, experiment
//! assignment and admin access checks.

use thiserror::Error;

/// The main error type for the calculator service.
///
/// # Example
///
/// ```
/// use clt_calc::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A calculator input field is outside its accepted range.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The camelCase name of the offending field.
        field: String,
        /// A description of the violated rule.
        message: String,
    },

    /// No experiment with this name is configured.
    #[error("Experiment not found: {name}")]
    ExperimentNotFound {
        /// The experiment name that was requested.
        name: String,
    },

    /// The experiment exists but has no variants to assign.
    #[error("Experiment '{experiment}' has no variants")]
    NoVariants {
        /// The experiment name.
        experiment: String,
    },

    /// The caller is not allowed into the admin area.
    #[error("Access denied for '{email}'")]
    AccessDenied {
        /// The email address that was rejected.
        email: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

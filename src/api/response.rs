//! Response bodies and error mapping for the calculator API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{CalculationInput, CalculationOutput, Experiment, FormattedResultRow};

/// Response body for `POST /calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    /// Identifier of this calculation, also logged as the correlation id.
    pub calculation_id: Uuid,
    /// The numeric result.
    pub result: CalculationOutput,
    /// The display rows for the result.
    pub rows: Vec<FormattedResultRow>,
}

/// Response body for `POST /format`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowsResponse {
    /// The display rows; empty for an unknown calculator.
    pub rows: Vec<FormattedResultRow>,
}

/// Response body for `POST /saved/reconstruct`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconstructResponse {
    /// The rebuilt output, `null` when the record cannot be rebuilt.
    pub result: Option<CalculationOutput>,
    /// Display rows for `result`; empty when it is `null`.
    pub rows: Vec<FormattedResultRow>,
}

/// Response body for `POST /saved/prefill`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefillResponse {
    /// The form input, `null` for an unknown calculator.
    pub input: Option<CalculationInput>,
}

/// Response body for `GET /admin/experiments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentsResponse {
    /// Configured experiments ordered by name.
    pub experiments: Vec<Experiment>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::InvalidInput { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details("INVALID_INPUT", message, field),
            },
            EngineError::ExperimentNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("EXPERIMENT_NOT_FOUND", message),
            },
            EngineError::NoVariants { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    message,
                    "The experiment must define at least one variant",
                ),
            },
            EngineError::AccessDenied { .. } => ApiErrorResponse {
                status: StatusCode::FORBIDDEN,
                error: ApiError::new("ACCESS_DENIED", message),
            },
        }
    }
}

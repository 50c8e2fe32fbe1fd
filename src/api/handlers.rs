//! HTTP request handlers for the calculator API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_with, validate};
use crate::experiments::assign_variant;
use crate::formatting::{format_loose, format_result};
use crate::models::{CalculationInput, SavedCalculationRecord};
use crate::saved::{prefill_input, reconstruct_output};

use super::request::{FormatRequest, USER_EMAIL_HEADER};
use super::response::{
    ApiError, ApiErrorResponse, CalculateResponse, ExperimentsResponse, PrefillResponse,
    ReconstructResponse, RowsResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/format", post(format_handler))
        .route("/saved/reconstruct", post(reconstruct_handler))
        .route("/saved/prefill", post(prefill_handler))
        .route("/experiments/:name/assign", post(assign_handler))
        .route("/admin/experiments", get(admin_experiments_handler))
        .with_state(state)
}

/// Handler for POST /calculate.
///
/// Validates the input, runs the matching calculator with the configured
/// rates and returns the result together with its display rows.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let input = match read_body(correlation_id, payload) {
        Ok(input) => input,
        Err(error) => return error_response(error),
    };
    let kind = input.kind();

    if let Err(err) = validate(&input) {
        warn!(
            correlation_id = %correlation_id,
            kind = %kind,
            error = %err,
            "Calculation input rejected"
        );
        return error_response(err.into());
    }

    let start_time = Instant::now();
    let result = calculate_with(&input, state.config().rates());
    let rows = format_result(&result);
    info!(
        correlation_id = %correlation_id,
        kind = %kind,
        rows = rows.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    json_response(
        StatusCode::OK,
        CalculateResponse {
            calculation_id: correlation_id,
            result,
            rows,
        },
    )
}

/// Handler for POST /format.
async fn format_handler(payload: Result<Json<FormatRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match read_body(correlation_id, payload) {
        Ok(request) => request,
        Err(error) => return error_response(error),
    };

    let rows = format_loose(&request.kind, &request.output);
    if rows.is_empty() {
        warn!(
            correlation_id = %correlation_id,
            kind = %request.kind,
            "Unknown calculator kind, nothing to format"
        );
    } else {
        debug!(correlation_id = %correlation_id, kind = %request.kind, "Formatted output");
    }

    json_response(StatusCode::OK, RowsResponse { rows })
}

/// Handler for POST /saved/reconstruct.
async fn reconstruct_handler(
    payload: Result<Json<SavedCalculationRecord>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let record = match read_body(correlation_id, payload) {
        Ok(record) => record,
        Err(error) => return error_response(error),
    };

    let result = reconstruct_output(&record);
    let rows = result.as_ref().map(format_result).unwrap_or_default();
    info!(
        correlation_id = %correlation_id,
        record_id = %record.id,
        kind = %record.calculator_kind,
        from_raw_output = record.raw_output.is_some(),
        rebuilt = result.is_some(),
        "Saved calculation reconstructed"
    );

    json_response(StatusCode::OK, ReconstructResponse { result, rows })
}

/// Handler for POST /saved/prefill.
async fn prefill_handler(payload: Result<Json<SavedCalculationRecord>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let record = match read_body(correlation_id, payload) {
        Ok(record) => record,
        Err(error) => return error_response(error),
    };

    let input = prefill_input(&record);
    info!(
        correlation_id = %correlation_id,
        record_id = %record.id,
        kind = %record.calculator_kind,
        prefilled = input.is_some(),
        "Saved calculation used as template"
    );

    json_response(StatusCode::OK, PrefillResponse { input })
}

/// Handler for POST /experiments/:name/assign.
async fn assign_handler(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();

    let assigned = state
        .config()
        .get_experiment(&name)
        .and_then(assign_variant);

    match assigned {
        Ok(variant) => {
            info!(
                correlation_id = %correlation_id,
                experiment = %name,
                variant = %variant.id,
                "Variant assigned"
            );
            json_response(StatusCode::OK, variant)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                experiment = %name,
                error = %err,
                "Variant assignment failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for GET /admin/experiments.
///
/// Only callers whose email belongs to the admin domain are let through.
async fn admin_experiments_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let correlation_id = Uuid::new_v4();

    let email = headers
        .get(USER_EMAIL_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if let Err(err) = state.admin_policy().authorize(email) {
        warn!(correlation_id = %correlation_id, error = %err, "Admin access denied");
        return error_response(err.into());
    }

    let mut experiments: Vec<_> = state
        .config()
        .config()
        .experiments()
        .values()
        .cloned()
        .collect();
    experiments.sort_by(|a, b| a.name.cmp(&b.name));
    info!(
        correlation_id = %correlation_id,
        count = experiments.len(),
        "Listed experiments for admin"
    );

    json_response(StatusCode::OK, ExperimentsResponse { experiments })
}

/// Unwraps a JSON body, mapping extractor rejections to API errors.
fn read_body<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse::bad_request(error))
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        AppState::new(config)
    }

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = create_router(create_test_state())
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_calculate_vacation_returns_result_and_rows() {
        let body = r#"{"kind":"vacation","input":{"monthlySalary":3000,"monthsWorked":12,"vacationDays":30}}"#;

        let (status, json) = send(post_json("/calculate", body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["result"]["kind"], "vacation");
        assert_eq!(json["rows"][2]["value"], "R$\u{a0}4.000,00");
        assert_eq!(json["rows"].as_array().unwrap().len(), 3);
        assert!(json["calculationId"].is_string());
    }

    #[tokio::test]
    async fn test_calculate_rejects_out_of_range_input() {
        let body = r#"{"kind":"thirteenthSalary","input":{"monthlySalary":3000,"monthsWorked":13}}"#;

        let (status, json) = send(post_json("/calculate", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_INPUT");
        assert_eq!(json["details"], "monthsWorked");
    }

    #[tokio::test]
    async fn test_calculate_missing_field_is_validation_error() {
        let body = r#"{"kind":"employeeCost","input":{"mealAllowance":500}}"#;

        let (status, json) = send(post_json("/calculate", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_calculate_bad_syntax_is_malformed_json() {
        let (status, json) = send(post_json("/calculate", "{not json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_calculate_without_content_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/calculate")
            .body(Body::from("{}"))
            .unwrap();

        let (status, json) = send(request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_format_unknown_kind_returns_no_rows() {
        let (status, json) = send(post_json("/format", r#"{"kind":"rescisao","output":{}}"#)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["rows"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_assign_unknown_experiment_is_not_found() {
        let (status, json) = send(post_json("/experiments/nope/assign", "")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["code"], "EXPERIMENT_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_assign_experiment_without_variants_is_config_error() {
        use crate::config::{AccessConfig, AppConfig, StatutoryRates};
        use crate::models::Experiment;

        let config = AppConfig::new(
            StatutoryRates::default(),
            AccessConfig {
                admin_email_domain: "empresa.com.br".to_string(),
            },
            vec![Experiment {
                name: "empty".to_string(),
                variants: Vec::new(),
            }],
        );
        let router = create_router(AppState::new(ConfigLoader::from_config(config)));

        let response = router
            .oneshot(post_json("/experiments/empty/assign", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_admin_requires_corporate_email() {
        let request = Request::builder()
            .uri("/admin/experiments")
            .body(Body::empty())
            .unwrap();

        let (status, json) = send(request).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["code"], "ACCESS_DENIED");
    }
}

//! HTTP request handlers for the Dayflow engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::attendance;
use crate::ledger;
use crate::models::PayPeriod;
use crate::payroll;

use super::request::{
    CheckInRequest, CheckOutRequest, DecideLeaveRequest, PeriodQuery, SubmitLeaveRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/leave/request", post(submit_leave_handler))
        .route("/leave/:request_id/decide", post(decide_leave_handler))
        .route("/leave/requests/:employee_id", get(list_leave_handler))
        .route("/leave/balance/:employee_id", get(leave_balance_handler))
        .route("/payroll/:employee_id", get(payroll_handler))
        .route(
            "/attendance/summary/:employee_id",
            get(attendance_summary_handler),
        )
        .route("/attendance/check-in", post(check_in_handler))
        .route("/attendance/check-out", post(check_out_handler))
        .with_state(state)
}

/// Liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Unwraps a JSON body, converting extractor rejections into the API
/// error shape.
fn parse_json<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries the detailed error from serde.
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
            Err((StatusCode::BAD_REQUEST, Json(error)).into_response())
        }
    }
}

/// Unwraps query parameters, converting extractor rejections into the API
/// error shape.
fn parse_query<T>(
    correlation_id: Uuid,
    query: Result<Query<T>, QueryRejection>,
) -> Result<T, Response> {
    match query {
        Ok(Query(params)) => Ok(params),
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Query rejection"
            );
            let error = ApiError::validation_error(body_text);
            Err((StatusCode::BAD_REQUEST, Json(error)).into_response())
        }
    }
}

/// Handler for `POST /leave/request`.
async fn submit_leave_handler(
    State(state): State<AppState>,
    payload: Result<Json<SubmitLeaveRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let body = match parse_json(correlation_id, payload) {
        Ok(body) => body,
        Err(response) => return response,
    };

    match ledger::submit_request(
        state.directory(),
        state.leave(),
        &body.employee_id,
        body.leave_type,
        body.start_date,
        body.end_date,
        &body.reason,
    ) {
        Ok(request) => {
            info!(
                correlation_id = %correlation_id,
                request_id = %request.id,
                employee_id = %request.employee_id,
                days = request.days,
                "Leave request submitted"
            );
            (StatusCode::OK, Json(request)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Leave submission failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `POST /leave/:request_id/decide`.
async fn decide_leave_handler(
    State(state): State<AppState>,
    Path(request_id): Path<Uuid>,
    payload: Result<Json<DecideLeaveRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let body = match parse_json(correlation_id, payload) {
        Ok(body) => body,
        Err(response) => return response,
    };

    match ledger::decide(
        state.leave(),
        request_id,
        body.decision,
        body.admin_comment.as_deref(),
    ) {
        Ok(request) => {
            info!(
                correlation_id = %correlation_id,
                request_id = %request.id,
                status = %request.status,
                "Leave request decided"
            );
            (StatusCode::OK, Json(request)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                request_id = %request_id,
                error = %err,
                "Leave decision failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `GET /leave/requests/:employee_id`.
async fn list_leave_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    match ledger::list_requests(state.leave(), &employee_id) {
        Ok(requests) => (StatusCode::OK, Json(requests)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for `GET /leave/balance/:employee_id`.
async fn leave_balance_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    match ledger::balance_overview(state.leave(), &employee_id) {
        Ok(balances) => (StatusCode::OK, Json(balances)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for `GET /payroll/:employee_id?month&year`.
async fn payroll_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let query = match parse_query(correlation_id, query) {
        Ok(query) => query,
        Err(response) => return response,
    };
    let period = match PayPeriod::new(query.month, query.year) {
        Ok(period) => period,
        Err(err) => return ApiErrorResponse::from(err).into_response(),
    };

    match payroll::calculate(state.directory(), state.attendance(), &employee_id, period) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                period = %result.period,
                present_days = result.present_days,
                payout = %result.payout,
                "Payroll calculated"
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                error = %err,
                "Payroll calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `GET /attendance/summary/:employee_id?month&year`.
async fn attendance_summary_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let query = match parse_query(correlation_id, query) {
        Ok(query) => query,
        Err(response) => return response,
    };
    let period = match PayPeriod::new(query.month, query.year) {
        Ok(period) => period,
        Err(err) => return ApiErrorResponse::from(err).into_response(),
    };

    // Resolve the employee first so unknown ids surface as 404 rather
    // than an empty summary.
    match state.directory().get_by_id(&employee_id) {
        Ok(Some(_)) => {}
        Ok(None) => {
            return ApiErrorResponse::from(crate::error::EngineError::EmployeeNotFound {
                id: employee_id,
            })
            .into_response();
        }
        Err(err) => return ApiErrorResponse::from(err).into_response(),
    }

    match attendance::summarize(state.attendance(), &employee_id, period) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for `POST /attendance/check-in`.
async fn check_in_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckInRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let body = match parse_json(correlation_id, payload) {
        Ok(body) => body,
        Err(response) => return response,
    };

    match attendance::record_check_in(
        state.directory(),
        state.attendance(),
        &body.employee_id,
        body.date,
        body.time,
    ) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %record.employee_id,
                date = %record.date,
                "Checked in"
            );
            (StatusCode::OK, Json(record)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Check-in failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `POST /attendance/check-out`.
async fn check_out_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckOutRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let body = match parse_json(correlation_id, payload) {
        Ok(body) => body,
        Err(response) => return response,
    };

    match attendance::record_check_out(state.attendance(), &body.employee_id, body.date, body.time)
    {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %record.employee_id,
                date = %record.date,
                "Checked out"
            );
            (StatusCode::OK, Json(record)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Check-out failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

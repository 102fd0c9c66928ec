//! Integration tests for the Dayflow payroll and attendance engine.
//!
//! This test suite exercises the HTTP API end to end:
//! - Leave submission, approval and rejection
//! - Exactly-once decisions and balance debits
//! - Payroll calculation with period filtering and rounding
//! - Attendance check-in/check-out and monthly summaries
//! - Error cases (unknown employees, malformed bodies, invalid periods)

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use dayflow_engine::api::{AppState, create_router};
use dayflow_engine::config::PolicyLoader;
use dayflow_engine::store::InMemoryStore;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let loader = PolicyLoader::load("./config/dayflow").expect("Failed to load config");
    let store = InMemoryStore::new(loader.policy().clone());
    for employee in loader.employees() {
        store
            .add_employee(employee.clone())
            .expect("Failed to seed employee");
    }
    AppState::with_store(Arc::new(store))
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn send_json(router: Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    read_response(response).await
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    read_response(response).await
}

async fn read_response(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    (status, json)
}

async fn submit_leave(
    router: Router,
    employee_id: &str,
    leave_type: &str,
    start: &str,
    end: &str,
) -> (StatusCode, Value) {
    send_json(
        router,
        "POST",
        "/leave/request",
        json!({
            "employee_id": employee_id,
            "leave_type": leave_type,
            "start_date": start,
            "end_date": end,
            "reason": "Integration test leave"
        }),
    )
    .await
}

/// Seeds a full working day through check-in and check-out.
async fn work_day(router: Router, employee_id: &str, date: &str) {
    let (status, _) = send_json(
        router.clone(),
        "POST",
        "/attendance/check-in",
        json!({ "employee_id": employee_id, "date": date, "time": "09:00:00" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send_json(
        router,
        "POST",
        "/attendance/check-out",
        json!({ "employee_id": employee_id, "date": date, "time": "17:30:00" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

fn pto_available(balances: &Value) -> u64 {
    balances
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["leave_type"] == "paid_time_off")
        .unwrap()["available"]
        .as_u64()
        .unwrap()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = get(create_router_for_test(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

// =============================================================================
// Leave Ledger
// =============================================================================

#[tokio::test]
async fn test_submit_leave_computes_inclusive_days() {
    let router = create_router_for_test();
    let (status, body) =
        submit_leave(router, "emp_001", "paid_time_off", "2026-01-05", "2026-01-07").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["days"], 3);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["employee_id"], "emp_001");
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn test_single_day_leave_counts_one_day() {
    let router = create_router_for_test();
    let (status, body) =
        submit_leave(router, "emp_001", "sick", "2026-03-10", "2026-03-10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["days"], 1);
}

#[tokio::test]
async fn test_submission_does_not_touch_balance() {
    let router = create_router_for_test();
    let (status, _) =
        submit_leave(router.clone(), "emp_001", "paid_time_off", "2026-01-05", "2026-01-07").await;
    assert_eq!(status, StatusCode::OK);

    let (status, balances) = get(router, "/leave/balance/emp_001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pto_available(&balances), 24);
}

#[tokio::test]
async fn test_end_before_start_is_rejected() {
    let router = create_router_for_test();
    let (status, body) =
        submit_leave(router, "emp_001", "paid_time_off", "2026-01-07", "2026-01-05").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_submit_for_unknown_employee_is_404() {
    let router = create_router_for_test();
    let (status, body) =
        submit_leave(router, "emp_999", "paid_time_off", "2026-01-05", "2026-01-07").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_approval_debits_balance_once() {
    let router = create_router_for_test();
    let (_, request) =
        submit_leave(router.clone(), "emp_001", "paid_time_off", "2026-01-05", "2026-01-07").await;
    let id = request["id"].as_str().unwrap().to_string();

    let (status, decided) = send_json(
        router.clone(),
        "POST",
        &format!("/leave/{}/decide", id),
        json!({ "decision": "approved" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decided["status"], "approved");

    let (_, balances) = get(router, "/leave/balance/emp_001").await;
    assert_eq!(pto_available(&balances), 21);
}

#[tokio::test]
async fn test_second_decision_conflicts() {
    let router = create_router_for_test();
    let (_, request) =
        submit_leave(router.clone(), "emp_001", "paid_time_off", "2026-01-05", "2026-01-07").await;
    let id = request["id"].as_str().unwrap().to_string();

    let (status, _) = send_json(
        router.clone(),
        "POST",
        &format!("/leave/{}/decide", id),
        json!({ "decision": "approved" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_json(
        router.clone(),
        "POST",
        &format!("/leave/{}/decide", id),
        json!({ "decision": "rejected", "admin_comment": "Too late" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "INVALID_STATE");

    // The racing rejection must not claw back the debit.
    let (_, balances) = get(router, "/leave/balance/emp_001").await;
    assert_eq!(pto_available(&balances), 21);
}

#[tokio::test]
async fn test_rejection_requires_comment() {
    let router = create_router_for_test();
    let (_, request) =
        submit_leave(router.clone(), "emp_001", "sick", "2026-02-02", "2026-02-03").await;
    let id = request["id"].as_str().unwrap().to_string();

    let (status, body) = send_json(
        router.clone(),
        "POST",
        &format!("/leave/{}/decide", id),
        json!({ "decision": "rejected", "admin_comment": "   " }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    // The failed rejection leaves the request pending and decidable.
    let (status, decided) = send_json(
        router,
        "POST",
        &format!("/leave/{}/decide", id),
        json!({ "decision": "rejected", "admin_comment": "Coverage gap that week" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decided["status"], "rejected");
    assert_eq!(decided["admin_comment"], "Coverage gap that week");
}

#[tokio::test]
async fn test_rejection_does_not_touch_balance() {
    let router = create_router_for_test();
    let (_, request) =
        submit_leave(router.clone(), "emp_001", "sick", "2026-02-02", "2026-02-03").await;
    let id = request["id"].as_str().unwrap().to_string();

    let (status, _) = send_json(
        router.clone(),
        "POST",
        &format!("/leave/{}/decide", id),
        json!({ "decision": "rejected", "admin_comment": "Denied" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, balances) = get(router, "/leave/balance/emp_001").await;
    let sick = balances
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["leave_type"] == "sick")
        .unwrap()
        .clone();
    assert_eq!(sick["used"], 0);
    assert_eq!(sick["available"], 7);
}

#[tokio::test]
async fn test_insufficient_balance_keeps_request_pending() {
    let router = create_router_for_test();
    // Sick allowance is 7 days; ask for 10.
    let (status, request) =
        submit_leave(router.clone(), "emp_001", "sick", "2026-04-01", "2026-04-10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(request["days"], 10);
    let id = request["id"].as_str().unwrap().to_string();

    let (status, body) = send_json(
        router.clone(),
        "POST",
        &format!("/leave/{}/decide", id),
        json!({ "decision": "approved" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (_, requests) = get(router, "/leave/requests/emp_001").await;
    assert_eq!(requests[0]["status"], "pending");
}

#[tokio::test]
async fn test_decide_unknown_request_is_404() {
    let router = create_router_for_test();
    let (status, body) = send_json(
        router,
        "POST",
        "/leave/00000000-0000-0000-0000-000000000000/decide",
        json!({ "decision": "approved" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_listing_orders_pending_first() {
    let router = create_router_for_test();
    let (_, first) =
        submit_leave(router.clone(), "emp_001", "paid_time_off", "2026-01-05", "2026-01-06").await;
    let (_, _second) =
        submit_leave(router.clone(), "emp_001", "sick", "2026-02-02", "2026-02-02").await;

    let first_id = first["id"].as_str().unwrap().to_string();
    let (status, _) = send_json(
        router.clone(),
        "POST",
        &format!("/leave/{}/decide", first_id),
        json!({ "decision": "approved" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, listing) = get(router, "/leave/requests/emp_001").await;
    assert_eq!(status, StatusCode::OK);
    let listing = listing.as_array().unwrap();
    assert_eq!(listing.len(), 2);
    assert_eq!(listing[0]["status"], "pending");
    assert_eq!(listing[1]["status"], "approved");
}

#[tokio::test]
async fn test_listing_is_scoped_per_employee() {
    let router = create_router_for_test();
    submit_leave(router.clone(), "emp_001", "sick", "2026-02-02", "2026-02-02").await;
    submit_leave(router.clone(), "emp_002", "sick", "2026-02-03", "2026-02-03").await;

    let (_, listing) = get(router, "/leave/requests/emp_002").await;
    let listing = listing.as_array().unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0]["employee_id"], "emp_002");
}

// =============================================================================
// Payroll
// =============================================================================

#[tokio::test]
async fn test_payroll_for_twenty_present_days() {
    let router = create_router_for_test();
    // 20 working days in January 2026.
    for day in 1..=20 {
        work_day(router.clone(), "emp_001", &format!("2026-01-{:02}", day)).await;
    }

    let (status, body) = get(router, "/payroll/emp_001?month=1&year=2026").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["employee_id"], "emp_001");
    assert_eq!(body["employee_name"], "Sarah Johnson");
    assert_eq!(body["period"], "1/2026");
    assert_eq!(body["base_salary"], "3000");
    assert_eq!(body["present_days"], 20);
    assert_eq!(body["daily_rate"], "100");
    assert_eq!(body["payout"], "2000");
}

#[tokio::test]
async fn test_payroll_ignores_records_outside_period() {
    let router = create_router_for_test();
    work_day(router.clone(), "emp_001", "2026-01-15").await;
    work_day(router.clone(), "emp_001", "2026-02-10").await;

    let (status, body) = get(router, "/payroll/emp_001?month=1&year=2026").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["present_days"], 1);
    assert_eq!(body["payout"], "100");
}

#[tokio::test]
async fn test_payroll_with_no_attendance_pays_zero() {
    let router = create_router_for_test();
    let (status, body) = get(router, "/payroll/emp_001?month=1&year=2026").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["present_days"], 0);
    assert_eq!(body["payout"], "0");
}

#[tokio::test]
async fn test_payroll_rounds_payout_half_up() {
    let router = create_router_for_test();
    // emp_002 earns 2800 a month, so one present day pays
    // 2800 / 30 = 93.33..., which rounds to 93.
    work_day(router.clone(), "emp_002", "2026-01-12").await;

    let (status, body) = get(router, "/payroll/emp_002?month=1&year=2026").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["present_days"], 1);
    assert_eq!(body["payout"], "93");
}

#[tokio::test]
async fn test_payroll_for_unknown_employee_is_404() {
    let router = create_router_for_test();
    let (status, body) = get(router, "/payroll/emp_999?month=1&year=2026").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_payroll_rejects_malformed_period_query() {
    let router = create_router_for_test();
    let (status, body) = get(router.clone(), "/payroll/emp_001?month=abc&year=2026").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, body) = get(router, "/payroll/emp_001").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_payroll_rejects_invalid_month() {
    let router = create_router_for_test();
    let (status, body) = get(router, "/payroll/emp_001?month=13&year=2026").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Attendance
// =============================================================================

#[tokio::test]
async fn test_check_in_creates_working_record() {
    let router = create_router_for_test();
    let (status, body) = send_json(
        router,
        "POST",
        "/attendance/check-in",
        json!({ "employee_id": "emp_001", "date": "2026-01-05", "time": "09:00:00" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "working");
    assert_eq!(body["check_in"], "09:00:00");
    assert!(body["check_out"].is_null());
}

#[tokio::test]
async fn test_duplicate_check_in_is_rejected() {
    let router = create_router_for_test();
    let payload = json!({ "employee_id": "emp_001", "date": "2026-01-05", "time": "09:00:00" });

    let (status, _) =
        send_json(router.clone(), "POST", "/attendance/check-in", payload.clone()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_json(router, "POST", "/attendance/check-in", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_check_out_completes_the_day() {
    let router = create_router_for_test();
    send_json(
        router.clone(),
        "POST",
        "/attendance/check-in",
        json!({ "employee_id": "emp_001", "date": "2026-01-05", "time": "09:00:00" }),
    )
    .await;

    let (status, body) = send_json(
        router,
        "POST",
        "/attendance/check-out",
        json!({ "employee_id": "emp_001", "date": "2026-01-05", "time": "17:30:00" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "present");
    assert_eq!(body["check_out"], "17:30:00");
}

#[tokio::test]
async fn test_check_out_before_check_in_is_rejected() {
    let router = create_router_for_test();
    send_json(
        router.clone(),
        "POST",
        "/attendance/check-in",
        json!({ "employee_id": "emp_001", "date": "2026-01-05", "time": "09:00:00" }),
    )
    .await;

    let (status, body) = send_json(
        router,
        "POST",
        "/attendance/check-out",
        json!({ "employee_id": "emp_001", "date": "2026-01-05", "time": "08:00:00" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_check_out_without_check_in_is_rejected() {
    let router = create_router_for_test();
    let (status, body) = send_json(
        router,
        "POST",
        "/attendance/check-out",
        json!({ "employee_id": "emp_001", "date": "2026-01-05", "time": "17:30:00" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_attendance_summary_counts_completed_days() {
    let router = create_router_for_test();
    work_day(router.clone(), "emp_001", "2026-01-05").await;
    work_day(router.clone(), "emp_001", "2026-01-06").await;
    // A check-in without a check-out stays in the working status and is
    // not counted as present.
    send_json(
        router.clone(),
        "POST",
        "/attendance/check-in",
        json!({ "employee_id": "emp_001", "date": "2026-01-07", "time": "09:00:00" }),
    )
    .await;

    let (status, body) = get(router, "/attendance/summary/emp_001?month=1&year=2026").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["present_days"], 2);
    assert_eq!(body["absent_days"], 0);
    assert_eq!(body["on_leave_days"], 0);
}

#[tokio::test]
async fn test_attendance_summary_scopes_to_period() {
    let router = create_router_for_test();
    work_day(router.clone(), "emp_001", "2026-01-05").await;
    work_day(router.clone(), "emp_001", "2026-02-05").await;

    let (status, body) = get(router, "/attendance/summary/emp_001?month=2&year=2026").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["present_days"], 1);
}

#[tokio::test]
async fn test_attendance_summary_for_unknown_employee_is_404() {
    let router = create_router_for_test();
    let (status, body) = get(router, "/attendance/summary/emp_999?month=1&year=2026").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

// =============================================================================
// Request Parsing
// =============================================================================

#[tokio::test]
async fn test_malformed_json_body() {
    let router = create_router_for_test();
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/leave/request")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    let (status, body) = read_response(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_required_field() {
    let router = create_router_for_test();
    let (status, body) = send_json(
        router,
        "POST",
        "/leave/request",
        json!({
            "employee_id": "emp_001",
            "leave_type": "sick",
            "start_date": "2026-01-05"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

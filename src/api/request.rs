//! Request types for the Dayflow engine API.
//!
//! This module defines the JSON request bodies and query parameters
//! accepted by the endpoints.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{LeaveDecision, LeaveType};

/// Request body for `POST /leave/request`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitLeaveRequest {
    /// The employee requesting leave.
    pub employee_id: String,
    /// The leave type the request draws from.
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// The employee's stated reason.
    pub reason: String,
}

/// Request body for `POST /leave/:request_id/decide`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecideLeaveRequest {
    /// The administrative decision.
    pub decision: LeaveDecision,
    /// Administrative comment; required when rejecting.
    #[serde(default)]
    pub admin_comment: Option<String>,
}

/// Query parameters scoping payroll and attendance reads to one period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PeriodQuery {
    /// The month component (1-12).
    pub month: u32,
    /// The year component.
    pub year: i32,
}

/// Request body for `POST /attendance/check-in`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInRequest {
    /// The employee checking in.
    pub employee_id: String,
    /// The calendar day being checked in.
    pub date: NaiveDate,
    /// Time of day of the check-in.
    pub time: NaiveTime,
}

/// Request body for `POST /attendance/check-out`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutRequest {
    /// The employee checking out.
    pub employee_id: String,
    /// The calendar day being checked out.
    pub date: NaiveDate,
    /// Time of day of the check-out.
    pub time: NaiveTime,
}

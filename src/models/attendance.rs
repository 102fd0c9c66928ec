//! Attendance models.
//!
//! This module defines the per-day attendance record, its status values and
//! the aggregated period summary returned by the read side.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// The status of a single attendance day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee worked on site or remotely that day.
    Present,
    /// The employee was absent without an approved leave.
    Absent,
    /// The employee was on approved leave.
    Leave,
    /// A public holiday; no attendance expected.
    Holiday,
    /// A weekend day; no attendance expected.
    Weekend,
    /// The day is in progress (checked in, not yet checked out).
    Working,
}

/// A single per-day attendance record for one employee.
///
/// At most one record exists per `(employee_id, date)`. A record is created
/// by a check-in action and mutated exactly once by the matching check-out;
/// records are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar day the record covers.
    pub date: NaiveDate,
    /// Time of day the employee checked in, if any.
    pub check_in: Option<NaiveTime>,
    /// Time of day the employee checked out, if any.
    pub check_out: Option<NaiveTime>,
    /// The status of the day.
    pub status: AttendanceStatus,
}

/// Aggregated attendance counts for one employee over a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Number of days with `present` status in the period.
    pub present_days: u32,
    /// Number of days with `absent` status in the period.
    pub absent_days: u32,
    /// Number of days with `leave` status in the period.
    pub on_leave_days: u32,
}

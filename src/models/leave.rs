//! Leave models and related types.
//!
//! This module defines the leave request lifecycle types and the per-type
//! balance record maintained by the leave ledger.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Category of time off, each with its own balance pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Paid time off (annual leave).
    PaidTimeOff,
    /// Sick leave.
    Sick,
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaveType::PaidTimeOff => write!(f, "paid_time_off"),
            LeaveType::Sick => write!(f, "sick"),
        }
    }
}

/// Lifecycle status of a leave request.
///
/// A request is created `pending` and transitions exactly once to either
/// `approved` or `rejected`. Both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting an administrative decision.
    Pending,
    /// Approved; the balance has been debited.
    Approved,
    /// Rejected with an administrative comment; no balance change.
    Rejected,
}

impl LeaveStatus {
    /// Returns true for the terminal statuses (`approved`, `rejected`).
    pub fn is_terminal(&self) -> bool {
        matches!(self, LeaveStatus::Approved | LeaveStatus::Rejected)
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaveStatus::Pending => write!(f, "pending"),
            LeaveStatus::Approved => write!(f, "approved"),
            LeaveStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// An administrative decision on a pending leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveDecision {
    /// Approve the request and debit the balance.
    Approved,
    /// Reject the request; requires a non-empty admin comment.
    Rejected,
}

/// A single leave request submitted by an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier for the request.
    pub id: Uuid,
    /// The employee requesting leave.
    pub employee_id: String,
    /// The leave type the request draws from.
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Number of leave days, derived from the inclusive date range.
    pub days: u32,
    /// Current lifecycle status.
    pub status: LeaveStatus,
    /// The employee's stated reason for the request.
    pub reason: String,
    /// Administrative comment; always present on rejected requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_comment: Option<String>,
    /// When the request was submitted.
    pub submitted_at: DateTime<Utc>,
}

impl LeaveRequest {
    /// Returns true while the request awaits a decision.
    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }
}

/// Per-employee, per-type leave balance.
///
/// Invariant: `available = total - used`, with `used <= total`, at all
/// times. Mutations go through [`LeaveBalance::with_used_delta`], which
/// refuses any delta that would break the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// The leave type this balance tracks.
    pub leave_type: LeaveType,
    /// Total days allocated for the year.
    pub total: u32,
    /// Days consumed by approved requests.
    pub used: u32,
    /// Days still available (`total - used`).
    pub available: u32,
}

impl LeaveBalance {
    /// Creates a fresh balance with nothing used yet.
    pub fn new(leave_type: LeaveType, total: u32) -> Self {
        Self {
            leave_type,
            total,
            used: 0,
            available: total,
        }
    }

    /// Returns a copy with `used` shifted by `delta`, or `None` when the
    /// delta would drive `used` below zero or past `total`.
    pub fn with_used_delta(&self, delta: i64) -> Option<Self> {
        let used = i64::from(self.used).checked_add(delta)?;
        if used < 0 || used > i64::from(self.total) {
            return None;
        }
        let used = used as u32;
        Some(Self {
            leave_type: self.leave_type,
            total: self.total,
            used,
            available: self.total - used,
        })
    }

    /// Checks the `available = total - used` invariant.
    pub fn is_consistent(&self) -> bool {
        self.used <= self.total && self.available == self.total - self.used
    }
}
